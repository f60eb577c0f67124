use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use election_bubbles_core::{render_chart, ChartConfig, NoHover, Record, SvgDocument};
use std::path::Path;
use std::rc::Rc;

/// Renders `records` to a standalone SVG string.
pub fn render_svg(records: &[Record], config: &ChartConfig) -> Result<String> {
    let mut document = SvgDocument::new();
    render_chart(records, config, &mut document, Rc::new(NoHover))
        .map_err(|e| eyre!("Failed to serialize chart: {e}"))?;
    Ok(document.into_string())
}

/// Writes the chart to `path`, creating parent directories as needed.
pub async fn export_svg(records: &[Record], config: &ChartConfig, path: &Path) -> Result<()> {
    let svg = render_svg(records, config)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, svg)
        .await
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), areas = records.len(), "chart exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{export_svg, render_svg};
    use election_bubbles_core::{ChartConfig, Record};

    fn leeds() -> Vec<Record> {
        vec![Record {
            area: "Leeds".to_string(),
            region: "North".to_string(),
            winner: "Labour".to_string(),
            margin: "10%".to_string(),
        }]
    }

    #[test]
    fn svg_contains_bubble() {
        let svg = render_svg(&leeds(), &ChartConfig::default()).unwrap();
        assert!(svg.contains("<circle r=\"36\""));
        assert!(svg.contains(">Leeds</text>"));
    }

    #[tokio::test]
    async fn export_creates_directories() {
        let dir = std::env::temp_dir().join(format!("bubbles-export-{}", std::process::id()));
        let path = dir.join("nested/chart.svg");

        export_svg(&leeds(), &ChartConfig::default(), &path)
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<svg"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
