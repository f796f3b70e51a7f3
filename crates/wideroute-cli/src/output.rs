//! Human-readable listing.

use std::fmt;
use wideroute::plan::TablePlan;

///
/// TextListing
///
/// One block per table, one line per route:
///
/// ```text
/// app.events (8 patterns)
///   findByUserId            /api/app/events/user_id/{user_id}
///   findByUserIdAndStatus   /api/app/events/user_id_status/{user_id}/{status}  [filtering]
/// ```
///

pub struct TextListing<'a>(pub &'a [TablePlan]);

impl fmt::Display for TextListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, plan) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{} ({} patterns)", plan.name(), plan.catalog.len())?;

            let routes = plan.routes.routes();
            let width = routes
                .iter()
                .map(|r| r.method_id.len())
                .max()
                .unwrap_or_default();

            for route in routes {
                let mut flags = Vec::new();
                if route.requires_filtering {
                    flags.push("filtering");
                }
                if route.query_param_style {
                    flags.push("query params");
                }

                write!(f, "  {:width$}  {}", route.method_id, route.path)?;
                if !flags.is_empty() {
                    write!(f, "  [{}]", flags.join(", "))?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[must_use]
pub fn render_text(plans: &[TablePlan]) -> String {
    TextListing(plans).to_string()
}
