//! 占位符模板渲染
//!
//! 模板为纯文本，`{{field}}` 替换为记录字段，
//! 单独一行的 `---` 分隔 header 与 content。

use regex::{Captures, Regex};
use securities_core::types::{RenderedTemplate, TemplateData};
use securities_core::{CoreError, CoreResult, TemplateRenderer};

const SEPARATOR: &str = "---";

pub struct PlaceholderTemplateRenderer {
    placeholder: Regex,
}

impl PlaceholderTemplateRenderer {
    pub fn new() -> CoreResult<Self> {
        let placeholder = Regex::new(r"\{\{\s*([A-Za-z0-9_.]+)\s*\}\}")
            .map_err(|e| CoreError::TemplateError(e.to_string()))?;
        Ok(Self { placeholder })
    }

    fn substitute(&self, text: &str, data: &TemplateData) -> String {
        self.placeholder
            .replace_all(text, |caps: &Captures| {
                data.field(&caps[1]).unwrap_or_default()
            })
            .into_owned()
    }
}

impl TemplateRenderer for PlaceholderTemplateRenderer {
    fn render(&self, template: &str, data: &TemplateData) -> CoreResult<RenderedTemplate> {
        let lines: Vec<&str> = template.lines().collect();
        let (header, content) = match lines.iter().position(|l| l.trim() == SEPARATOR) {
            Some(at) => (lines[..at].join("\n"), lines[at + 1..].join("\n")),
            // 无分隔符：名称作为 header
            None => (data.name.clone(), template.to_string()),
        };

        Ok(RenderedTemplate {
            header: self.substitute(header.trim(), data),
            content: self.substitute(content.trim_matches('\n'), data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> TemplateData {
        let mut data = TemplateData {
            security_type: "EQUITY".to_string(),
            name: "ACME Corp".to_string(),
            ..Default::default()
        };
        data.extra
            .insert("exchange".to_string(), serde_json::json!("XNYS"));
        data.extra.insert("lotSize".to_string(), serde_json::json!(100));
        data
    }

    #[test]
    fn splits_header_and_content() {
        let renderer = PlaceholderTemplateRenderer::new().unwrap();
        let template = "{{name}} ({{securityType}})\n---\nExchange: {{ exchange }}\nLot: {{lotSize}}";

        let rendered = renderer.render(template, &data()).unwrap();

        assert_eq!(rendered.header, "ACME Corp (EQUITY)");
        assert_eq!(rendered.content, "Exchange: XNYS\nLot: 100");
    }

    #[test]
    fn template_without_separator_uses_name_as_header() {
        let renderer = PlaceholderTemplateRenderer::new().unwrap();

        let rendered = renderer.render("Exchange: {{exchange}}", &data()).unwrap();

        assert_eq!(rendered.header, "ACME Corp");
        assert_eq!(rendered.content, "Exchange: XNYS");
    }

    #[test]
    fn unknown_fields_render_empty() {
        let renderer = PlaceholderTemplateRenderer::new().unwrap();

        let rendered = renderer.render("x\n---\n[{{missing}}]", &data()).unwrap();

        assert_eq!(rendered.content, "[]");
    }
}
