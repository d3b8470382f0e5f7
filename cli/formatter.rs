use colored::*;

use super::runner::Report;

pub struct OutputFormatter;

impl OutputFormatter {
    /// 以彩色文本渲染报告
    pub fn format_report(report: &Report) -> String {
        let mut lines = Vec::new();
        lines.push(report.title.bold().cyan().to_string());
        lines.push(format!("{} {}", "input: ".dimmed(), report.input));
        lines.push(format!("{} {}", "output:".dimmed(), report.output.green()));

        for note in &report.notes {
            lines.push(format!("  {} {}", "-".blue(), note));
        }

        if !report.steps.is_empty() {
            lines.push(String::new());
            lines.push(
                format!("steps ({} total)", report.total_steps)
                    .yellow()
                    .to_string(),
            );
            for step in &report.steps {
                lines.push(Self::format_step(step));
            }
            if report.truncated {
                let hidden = report.total_steps.saturating_sub(report.steps.len());
                lines.push(
                    format!("... {} more step(s) not recorded", hidden)
                        .yellow()
                        .to_string(),
                );
            }
        }

        lines.join("\n")
    }

    /// 步骤编号着色，其余原样输出
    fn format_step(step: &str) -> String {
        match step.split_once(' ') {
            Some((number, rest)) => format!("{} {}", number.blue(), rest),
            None => step.to_string(),
        }
    }

    pub fn format_json(report: &Report) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    pub fn format_error(err: &dyn std::fmt::Display) -> String {
        format!("(error) {}", err.to_string().red())
    }
}
