//! All Experiences Tool
//!
//! Renders the full experience catalog so the model can browse what is
//! bookable before drilling into a specific record.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{Result as CoreResult, Tool, ToolCall, ToolSchema};

use crate::catalog::CatalogStore;

/// Tool listing every available experience
pub struct AllExperiencesTool {
    catalog: Arc<CatalogStore>,
}

impl AllExperiencesTool {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for AllExperiencesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_all_experiences".into(),
            description: "List every available experience with price, duration, and tags.".into(),
            parameters: vec![],
            category: Some("catalog".into()),
        }
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<String> {
        let mut output = String::from("Available Experiences:\n");

        for exp in self.catalog.list_experiences() {
            output.push_str(&format!(
                "  {} ({}, {}) - ${} per person, {}h, rated {:.1} [{}]\n",
                exp.name,
                exp.city,
                exp.country,
                exp.price,
                exp.duration_hours,
                exp.rating,
                exp.tags.join(", ")
            ));
        }

        Ok(output.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_every_record() {
        let catalog = Arc::new(CatalogStore::bundled().unwrap());
        let count = catalog.experience_count();
        let tool = AllExperiencesTool::new(catalog);

        let output = tool.execute(&ToolCall::new("get_all_experiences")).await.unwrap();
        assert!(output.contains("Thai Cooking Class"));
        assert!(output.contains("Angkor Sunrise Tour"));
        assert_eq!(output.lines().count(), count + 1);
    }
}
