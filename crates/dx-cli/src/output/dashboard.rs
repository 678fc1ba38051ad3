//! Human-readable renderings of the dashboard and session state.

use std::fmt::Write as _;

use console::style;
use dx_core::entities::UserProfile;
use dx_core::responses::{DashboardView, SessionView};

pub const GAUGE_WIDTH: usize = 40;

/// Horizontal bar for a 0–100 percentage, `width` cells wide.
#[must_use]
pub fn gauge(percentage: f64, width: usize) -> String {
    let ratio = percentage.clamp(0.0, 100.0) / 100.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[must_use]
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Diagnosis result").bold().underlined());
    let _ = writeln!(out, "  Hypothesis   {}", style(&view.hypothesis).bold());
    let _ = writeln!(
        out,
        "  Confidence   {}",
        style(format!("{:.2}%", view.percentage)).magenta().bold()
    );
    let _ = writeln!(out, "  {}", style(gauge(view.percentage, GAUGE_WIDTH)).magenta());
    let _ = writeln!(out, "  Uncertainty  {:.2}%", view.uncertainty);

    section(&mut out, "Description", &view.description);
    section(&mut out, "Recommendation", &view.recommendation);

    if let Some(profile) = &view.profile {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Respondent").bold());
        out.push_str(&profile_lines(profile));
    }
    out.trim_end().to_string()
}

fn section(out: &mut String, title: &str, body: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style(title).bold());
    if body.trim().is_empty() {
        let _ = writeln!(out, "  {}", style("(none provided)").dim());
    } else {
        for line in body.lines() {
            let _ = writeln!(out, "  {}", line.trim_end());
        }
    }
}

fn profile_lines(profile: &UserProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Name         {}", profile.full_name);
    let _ = writeln!(out, "  Age          {}", profile.age);
    let _ = writeln!(
        out,
        "  Program      {} (cohort {})",
        profile.program, profile.cohort_year
    );
    let _ = writeln!(out, "  Residence    {}", profile.residence);
    let _ = writeln!(out, "  Gender       {}", profile.gender.label());
    out
}

#[must_use]
pub fn render_session(view: &SessionView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        style("Current step:").bold(),
        view.current_step
    );
    for status in &view.steps {
        let marker = if status.reachable {
            style("✔").green().to_string()
        } else {
            style("✘").red().to_string()
        };
        let _ = write!(out, "  {marker} {:<14}", status.step.as_str());
        match (&status.reason, status.redirect) {
            (Some(reason), Some(redirect)) => {
                let _ = writeln!(out, "{reason}; run `{}`", redirect.command());
            }
            (Some(reason), None) => {
                let _ = writeln!(out, "{reason}");
            }
            _ => {
                let _ = writeln!(out);
            }
        }
    }

    if let Some(user_id) = view.user_id {
        let _ = writeln!(out, "User id:    {user_id}");
    }
    if let Some(hypothesis) = &view.hypothesis {
        let _ = writeln!(out, "Hypothesis: {} (#{})", hypothesis.name, hypothesis.id);
    }
    if view.answered > 0 {
        let _ = writeln!(out, "Answered:   {} symptom(s)", view.answered);
    }
    if let Some(result) = &view.result {
        let _ = writeln!(out, "Result:     {:.2}%", result.confidence());
    }
    if let Some(updated_at) = &view.updated_at {
        let _ = writeln!(out, "Updated:    {updated_at}");
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dx_core::entities::{DiagnosisResult, Hypothesis};
    use dx_core::enums::Gender;
    use dx_core::session::DiagnosisSession;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(50.0, 20)]
    #[case(76.5, 31)]
    #[case(100.0, 40)]
    #[case(130.0, 40)]
    #[case(-5.0, 0)]
    fn gauge_fill(#[case] percentage: f64, #[case] filled: usize) {
        let bar = gauge(percentage, GAUGE_WIDTH);
        assert_eq!(bar.chars().count(), GAUGE_WIDTH);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), filled);
    }

    fn view() -> DashboardView {
        let result = DiagnosisResult {
            hypothesis: Hypothesis {
                id: 2,
                name: "Kecanduan Sedang".into(),
                description: "Moderate online game addiction.".into(),
                recommendation: String::new(),
            },
            percentage: 76.5,
        };
        let profile = UserProfile {
            full_name: "Rina Wulandari".into(),
            age: 19,
            cohort_year: 2024,
            program: "Psikologi".into(),
            residence: "Bogor".into(),
            gender: Gender::Female,
        };
        DashboardView::new(7, Some(profile), &result)
    }

    #[test]
    fn dashboard_shows_two_decimal_percentages() {
        let out = console::strip_ansi_codes(&render_dashboard(&view())).to_string();
        assert!(out.contains("Kecanduan Sedang"));
        assert!(out.contains("76.50%"));
        assert!(out.contains("23.50%"));
        assert!(out.contains("Moderate online game addiction."));
        assert!(out.contains("(none provided)"));
        assert!(out.contains("Psikologi (cohort 2024)"));
    }

    #[test]
    fn empty_session_points_at_identity() {
        let out = console::strip_ansi_codes(&render_session(&DiagnosisSession::new().view()))
            .to_string();
        assert!(out.starts_with("Current step: identity"));
        assert!(out.contains("run `dxw identity`"));
        assert!(!out.contains("User id"));
    }
}
