//! Structured run results and their text rendering.
//!
//! Records are kept as data for the whole run and only turned into text when
//! the status file is written. The text layout is line-oriented: every line
//! is preceded by a newline, so the report starts with `\n` and has no
//! trailing newline.

use std::time::Duration;

/// Separator printed under the component name.
pub const SEPARATOR: &str = "--------------------------------------------------";

/// Classified result of one runner invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    /// Non-zero exit or termination by signal; carries stderr verbatim.
    Failed { stderr: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Failed { .. } => "FAILED",
        }
    }
}

/// One row of the report: which runner, how it went, and the detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub label: String,
    pub outcome: Outcome,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

impl RunRecord {
    pub fn detail(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Pass => None,
            Outcome::Failed { stderr } => Some(stderr),
        }
    }

    /// `"<label> : PASS"` or `"<label> : FAILED"`.
    pub fn headline(&self) -> String {
        format!("{} : {}", self.label, self.outcome.keyword())
    }

    /// Lines this record contributes to the report.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![self.headline()];
        if let Some(stderr) = self.detail() {
            lines.push(stderr.to_owned());
        }
        lines
    }
}

/// Ordered results for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    component: String,
    records: Vec<RunRecord>,
}

impl RunReport {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            records: Vec::new(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn push(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    /// Records in invocation order.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Not part of the rendered text; for callers that want an exit status.
    pub fn has_failures(&self) -> bool {
        self.records.iter().any(|r| !r.outcome.is_pass())
    }

    pub fn header_lines(&self) -> [String; 2] {
        [self.component.clone(), SEPARATOR.to_owned()]
    }

    pub fn lines(&self) -> Vec<String> {
        self.header_lines()
            .into_iter()
            .chain(self.records.iter().flat_map(RunRecord::report_lines))
            .collect()
    }

    pub fn render(&self) -> String {
        self.lines().iter().map(|line| format!("\n{}", line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pass(label: &str) -> RunRecord {
        RunRecord {
            label: label.into(),
            outcome: Outcome::Pass,
            exit_code: Some(0),
            duration: Duration::from_secs(1),
        }
    }

    fn failed(label: &str, stderr: &str) -> RunRecord {
        RunRecord {
            label: label.into(),
            outcome: Outcome::Failed {
                stderr: stderr.into(),
            },
            exit_code: Some(1),
            duration: Duration::from_secs(1),
        }
    }

    #[test]
    fn renders_header_and_records() {
        let mut report = RunReport::new("uvvm_vvc_framework");
        report.push(pass("Modelsim"));
        report.push(failed("Riviera Pro", "** Error: tb.vhd(12)"));

        assert_eq!(
            report.render(),
            format!(
                "\nuvvm_vvc_framework\n{}\nModelsim : PASS\nRiviera Pro : FAILED\n** Error: tb.vhd(12)",
                SEPARATOR
            )
        );
        assert!(report.has_failures());
    }

    #[test]
    fn empty_stderr_still_emits_detail_line() {
        let mut report = RunReport::new("c");
        report.push(failed("Modelsim", ""));
        assert!(report.render().ends_with("Modelsim : FAILED\n"));
    }

    #[test]
    fn all_pass_has_no_failures() {
        let mut report = RunReport::new("c");
        report.push(pass("Modelsim"));
        report.push(pass("Riviera Pro"));
        assert!(!report.has_failures());
        assert_eq!(report.render().matches(" : PASS").count(), 2);
    }

    prop_compose! {
        fn arb_record()(label in "[A-Za-z][A-Za-z ]{0,15}", fail in any::<bool>(), stderr in "[a-z0-9 ]{0,40}") -> RunRecord {
            if fail { failed(&label, &stderr) } else { pass(&label) }
        }
    }

    proptest! {
        #[test]
        fn render_keeps_invocation_order(records in prop::collection::vec(arb_record(), 0..6)) {
            let mut report = RunReport::new("component");
            for r in &records {
                report.push(r.clone());
            }
            let text = report.render();
            let header = format!("\ncomponent\n{}", SEPARATOR);
            prop_assert!(text.starts_with(&header));

            let mut cursor = header.len();
            for r in &records {
                let needle = format!("\n{}", r.headline());
                let at = text[cursor..].find(&needle).map(|i| i + cursor);
                prop_assert!(at.is_some(), "missing {:?}", needle);
                cursor = at.unwrap() + needle.len();
                if let Some(stderr) = r.detail() {
                    let expected = format!("\n{}", stderr);
                    prop_assert!(text[cursor..].starts_with(&expected));
                    cursor += expected.len();
                }
            }
            prop_assert_eq!(cursor, text.len());
        }

        #[test]
        fn pass_lines_never_carry_stderr(label in "[A-Za-z]{1,10}") {
            let record = pass(&label);
            prop_assert_eq!(record.report_lines(), vec![format!("{} : PASS", label)]);
        }
    }
}
