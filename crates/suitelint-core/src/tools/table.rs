//! Ordered command-pattern table.
//!
//! First match wins. Entries whose command name is a prefix of another
//! entry's (`ip` / `iptables`) must keep the longer name first; the
//! `every_entry_wins_its_own_probe` test pins that ordering.

use once_cell::sync::Lazy;
use regex::Regex;

/// One table entry mapping a command pattern to a tool wrapper.
pub struct ToolPattern {
    pub pattern: Regex,
    pub tool: &'static str,
    pub description: &'static str,
    /// Canonical command used by the determinism self-test.
    pub probe: &'static str,
}

macro_rules! tool_patterns {
    ($(($pattern:literal, $tool:literal, $description:literal, $probe:literal)),+ $(,)?) => {
        vec![
            $(ToolPattern {
                pattern: Regex::new(concat!("(?i)", $pattern)).expect("static tool pattern"),
                tool: $tool,
                description: $description,
                probe: $probe,
            }),+
        ]
    };
}

/// All patterns tolerate leading whitespace and a `sudo` prefix; matching
/// is case-insensitive.
pub static TOOL_PATTERNS: Lazy<Vec<ToolPattern>> = Lazy::new(|| {
    tool_patterns![
        // iptables before ip: `\b` alone would not confuse them, but the
        // ordering is part of the documented first-match policy.
        (r"^\s*(?:sudo\s+)?iptables\b", "Iptables", "configures netfilter packet filter rules", "iptables -L"),
        (r"^\s*(?:sudo\s+)?ip\b", "Ip", "shows and manipulates routing, devices, and addresses", "ip addr show"),
        (r"^\s*(?:sudo\s+)?ethtool\b", "Ethtool", "queries and changes NIC driver settings", "ethtool eth0"),
        (r"^\s*(?:sudo\s+)?sysctl\b", "Sysctl", "reads and modifies kernel runtime parameters", "sysctl -a"),
        (r"^\s*(?:sudo\s+)?systemctl\b", "Service", "controls systemd services", "systemctl status sshd"),
        (r"^\s*(?:sudo\s+)?modprobe\b", "Modprobe", "adds and removes kernel modules", "modprobe hv_netvsc"),
        (r"^\s*(?:sudo\s+)?lsmod\b", "Lsmod", "shows loaded kernel modules", "lsmod"),
        (r"^\s*(?:sudo\s+)?lscpu\b", "Lscpu", "displays CPU architecture information", "lscpu"),
        (r"^\s*(?:sudo\s+)?lspci\b", "Lspci", "lists PCI devices", "lspci -nn"),
        (r"^\s*(?:sudo\s+)?lsblk\b", "Lsblk", "lists block devices", "lsblk -o NAME,SIZE"),
        (r"^\s*(?:sudo\s+)?dmesg\b", "Dmesg", "reads the kernel ring buffer", "dmesg | tail"),
        (r"^\s*(?:sudo\s+)?uname\b", "Uname", "prints kernel and machine information", "uname -r"),
        (r"^\s*(?:sudo\s+)?free\b", "Free", "reports memory usage", "free -m"),
        (r"^\s*(?:sudo\s+)?df\b", "Df", "reports filesystem disk usage", "df -h"),
        (r"^\s*(?:sudo\s+)?mount\b", "Mount", "mounts filesystems", "mount /dev/sdb1 /mnt"),
        (r"^\s*(?:sudo\s+)?ping\b", "Ping", "sends ICMP echo requests", "ping -c 1 10.0.0.1"),
        (r"^\s*(?:sudo\s+)?echo\b", "Echo", "writes text to standard output", "echo 1"),
        (r"^\s*(?:sudo\s+)?cat\b", "Cat", "prints file contents", "cat /proc/cmdline"),
    ]
});

/// First table entry whose pattern matches the command, or `None`.
/// No match is an ordinary outcome, not an error.
pub fn match_tool(command: &str) -> Option<&'static ToolPattern> {
    TOOL_PATTERNS.iter().find(|p| p.pattern.is_match(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_wins_its_own_probe() {
        // Guards the first-match-wins ordering: if a broader pattern is
        // ever moved ahead of a more specific one, its probe fails here.
        for entry in TOOL_PATTERNS.iter() {
            let hit = match_tool(entry.probe)
                .unwrap_or_else(|| panic!("probe `{}` matched nothing", entry.probe));
            assert_eq!(
                hit.tool, entry.tool,
                "probe `{}` resolved to {} instead of {}",
                entry.probe, hit.tool, entry.tool
            );
        }
    }

    #[test]
    fn matching_is_deterministic() {
        let first = match_tool("ip addr show").unwrap().tool;
        for _ in 0..10 {
            assert_eq!(match_tool("ip addr show").unwrap().tool, first);
        }
        assert_eq!(first, "Ip");
    }

    #[test]
    fn ip_does_not_swallow_iptables() {
        assert_eq!(match_tool("iptables -A INPUT -j DROP").unwrap().tool, "Iptables");
        assert_eq!(match_tool("ip link set dev eth0 up").unwrap().tool, "Ip");
    }

    #[test]
    fn matching_is_case_insensitive_and_sudo_tolerant() {
        assert_eq!(match_tool("SUDO Dmesg --follow").unwrap().tool, "Dmesg");
        assert_eq!(match_tool("  sudo uname -a").unwrap().tool, "Uname");
    }

    #[test]
    fn unknown_commands_match_nothing() {
        assert!(match_tool("customtool --flag").is_none());
        assert!(match_tool("").is_none());
        // Command names embedded mid-string do not count.
        assert!(match_tool("describe the echo chamber").is_none());
    }
}
