use atl_api::views::{Dashboard, DashboardSummary};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render};

/// Handle `atl dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dashboard = Dashboard::load(&ctx.client).await?;
    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_sections(&dashboard.summary())?);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&dashboard, flags.format),
    }
}

fn render_sections(summary: &DashboardSummary) -> anyhow::Result<String> {
    let sections = [
        ("Active Projects", &summary.active_projects),
        ("Active Tasks", &summary.active_tasks),
        ("Contracts", &summary.contracts),
        ("Recent Updates", &summary.recent_updates),
    ];
    let mut blocks = Vec::with_capacity(sections.len());
    for (title, lines) in sections {
        blocks.push(format!("{title}\n{}", render(lines, OutputFormat::Table)?));
    }
    Ok(blocks.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use atl_api::views::DashboardSummary;

    use super::render_sections;

    #[test]
    fn sections_render_in_page_order() {
        let summary = DashboardSummary {
            active_projects: vec![String::from("Loft")],
            active_tasks: vec![String::from("Order fabric")],
            contracts: vec![String::from("Loft - Active")],
            recent_updates: Vec::new(),
        };
        let out = render_sections(&summary).expect("sections render");

        let projects = out.find("Active Projects").expect("projects heading");
        let tasks = out.find("Active Tasks").expect("tasks heading");
        let contracts = out.find("Contracts").expect("contracts heading");
        let recent = out.find("Recent Updates").expect("recent heading");
        assert!(projects < tasks && tasks < contracts && contracts < recent);
        assert!(out.contains("Order fabric"));
        assert!(out.ends_with("(no rows)"));
    }
}
