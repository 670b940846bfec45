//! HTML statement renderer.

use super::{RenderedDocument, StatementRenderer, format_amount};
use crate::statement::{StatementBundle, TOTAL_ACCOUNT};

const STYLE: &str = "<style>\n\
    body { font-family: Helvetica, Arial, sans-serif; color: #1a1a2e; margin: 2em; }\n\
    h1 { font-size: 1.4em; border-bottom: 2px solid #1a1a2e; padding-bottom: 0.3em; }\n\
    h2 { font-size: 1.1em; margin-top: 1.6em; }\n\
    table { border-collapse: collapse; width: 100%; margin-top: 0.6em; }\n\
    th, td { border: 1px solid #c8c8d0; padding: 0.35em 0.6em; font-size: 0.9em; }\n\
    th { background: #eef0f6; text-align: left; }\n\
    td.amount { text-align: right; font-variant-numeric: tabular-nums; }\n\
    tr.total td { font-weight: bold; background: #f5f6fa; }\n\
    td.empty { text-align: center; color: #777; }\n\
    p.disclaimer { margin-top: 2em; font-size: 0.75em; color: #555; }\n\
</style>\n";

/// Renders statements as a self-contained HTML document.
///
/// The document carries the statement accounts, the full contribution
/// history, and the interest history; it is what the export endpoint serves
/// for download.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlStatementRenderer;

impl StatementRenderer for HtmlStatementRenderer {
    fn render(&self, bundle: &StatementBundle) -> RenderedDocument {
        let statement = &bundle.statement;
        let mut html = String::with_capacity(16 * 1024);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "<title>Pension Statement {}</title>\n",
            statement.employee_id
        ));
        html.push_str(STYLE);
        html.push_str("</head>\n<body>\n");

        html.push_str("<h1>Pension Statement</h1>\n");
        html.push_str("<table>\n");
        html.push_str(&format!(
            "<tr><th>Member</th><td>{}</td></tr>\n",
            escape(&statement.employee_full_name)
        ));
        html.push_str(&format!(
            "<tr><th>SAP ID</th><td>{}</td></tr>\n",
            statement.employee_id
        ));
        html.push_str(&format!(
            "<tr><th>Pension ID</th><td>{}</td></tr>\n",
            statement.pension_id
        ));
        html.push_str(&format!(
            "<tr><th>Issued</th><td>{}</td></tr>\n",
            statement.as_of.format("%Y-%m-%d")
        ));
        html.push_str("</table>\n");

        html.push_str("<h2>Accounts</h2>\n<table>\n");
        html.push_str(
            "<tr><th>Account</th><th>Balance</th><th>Interest</th>\
             <th>Withdrawals</th><th>Closing Balance</th></tr>\n",
        );
        for account in &statement.accounts {
            let row_class = if account.name == TOTAL_ACCOUNT {
                " class=\"total\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<tr{row_class}><td>{}</td><td class=\"amount\">{}</td>\
                 <td class=\"amount\">{}</td><td class=\"amount\">{}</td>\
                 <td class=\"amount\">{}</td></tr>\n",
                escape(&account.name),
                format_amount(account.balance),
                format_amount(account.interest),
                format_amount(account.withdrawals),
                format_amount(account.closing_balance),
            ));
        }
        html.push_str("</table>\n");

        html.push_str("<h2>Contribution History</h2>\n<table>\n");
        html.push_str(
            "<tr><th>For Period</th><th>Recorded In</th><th>Office</th>\
             <th>Type</th><th>Amount</th></tr>\n",
        );
        if bundle.contributions.is_empty() {
            html.push_str("<tr><td colspan=\"5\" class=\"empty\">None recorded</td></tr>\n");
        }
        for row in &bundle.contributions {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td class=\"amount\">{}</td></tr>\n",
                row.for_period.map_or_else(String::new, |p| p.to_string()),
                row.in_period.map_or_else(String::new, |p| p.to_string()),
                escape(&row.office_name),
                escape(&row.contribution_type_name),
                format_amount(row.amount.unwrap_or_default()),
            ));
        }
        html.push_str("</table>\n");

        html.push_str("<h2>Computed Interests</h2>\n<table>\n");
        html.push_str("<tr><th>Period</th><th>Interest</th></tr>\n");
        if bundle.computed_interests.is_empty() {
            html.push_str("<tr><td colspan=\"2\" class=\"empty\">None recorded</td></tr>\n");
        }
        for row in &bundle.computed_interests {
            html.push_str(&format!(
                "<tr><td>{}</td><td class=\"amount\">{}</td></tr>\n",
                row.period,
                format_amount(row.interest),
            ));
        }
        html.push_str("</table>\n");

        html.push_str(
            "<p class=\"disclaimer\">This statement is computed from the fund registry at the \
             issue date shown above. Figures are informational and do not constitute a benefit \
             commitment.</p>\n",
        );
        html.push_str("</body>\n</html>\n");

        RenderedDocument {
            content_type: "text/html; charset=utf-8",
            file_name: format!("pension-statement-{}.html", statement.employee_id),
            body: html.into_bytes(),
        }
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
