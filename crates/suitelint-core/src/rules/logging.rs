//! Logging rule: no warning-level logging inside test methods.

use std::collections::BTreeSet;

use crate::config::CheckConfig;
use crate::parser::SourceFile;
use crate::rules::types::ViolationPayload;
use crate::rules::Rule;
use crate::visitor::CallSite;

/// Flags `log.warning(...)` / `logger.warning(...)` calls. The warning
/// level is reserved for the runner; tests log at debug/info or fail.
pub struct LogWarningRule {
    receivers: BTreeSet<String>,
}

impl LogWarningRule {
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            receivers: config.log_receivers.clone(),
        }
    }
}

impl Rule for LogWarningRule {
    fn id(&self) -> &'static str {
        "no-log-warning"
    }

    fn evaluate(&self, call: &CallSite, _file: &SourceFile) -> Option<ViolationPayload> {
        if call.attribute != "warning" {
            return None;
        }
        let receiver = call.receiver.as_ref()?;
        if !self.receivers.contains(receiver) {
            return None;
        }
        Some(ViolationPayload::LogWarning {
            call: "log.warning()".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::PythonParser;
    use crate::visitor::CheckVisitor;

    fn check(source: &str) -> Vec<crate::rules::Violation> {
        let mut parser = PythonParser::new().unwrap();
        let file = parser.parse("suite.py", source).unwrap();
        let config = CheckConfig::default();
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(LogWarningRule::new(&config))];
        CheckVisitor::run(&file, &config, &rules)
    }

    #[test]
    fn flags_log_and_logger_receivers() {
        let violations = check(
            "class TestSuite:\n\
             \x20   def test_basic(self) -> None:\n\
             \x20       log.warning(\"issue\")\n\
             \x20       logger.warning(\"issue\")\n",
        );
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].line, 3);
        assert_eq!(violations[1].line, 4);
        assert_eq!(
            violations[0].payload,
            ViolationPayload::LogWarning {
                call: "log.warning()".to_string()
            }
        );
    }

    #[test]
    fn other_levels_and_receivers_pass() {
        let violations = check(
            "class TestSuite:\n\
             \x20   def test_basic(self) -> None:\n\
             \x20       log.debug(\"fine\")\n\
             \x20       log.info(\"fine\")\n\
             \x20       console.warning(\"not a logger\")\n\
             \x20       self.log.warning(\"chained receiver, no bound name\")\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn helper_method_is_exempt() {
        let violations = check(
            "class TestSuite:\n\
             \x20   def _helper(self) -> None:\n\
             \x20       log.warning(\"x\")\n",
        );
        assert!(violations.is_empty());
    }
}
