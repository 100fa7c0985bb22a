//! Budget display formatting

use crate::models::BudgetReport;

/// Format the spending summary for the terminal
pub fn format_budget_report(report: &BudgetReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n💰 Total Spent:       {:>12}\n", report.total_spent));
    output.push_str(&format!("   Monthly Budget:    {:>12}\n", report.budget));
    output.push_str(&format!("📉 Budget Remaining:  {:>12}\n", report.remaining));

    if report.is_exceeded() {
        output.push_str("⚠️ Warning: Budget Exceeded!\n");
    } else {
        output.push_str(&format!(
            "✅ You have {} left for the month.\n",
            report.remaining
        ));
    }

    output
}
