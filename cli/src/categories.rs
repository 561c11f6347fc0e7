use debugger::Category;
use serde::Serialize;

use crate::error::Result;
use crate::ui;

#[derive(Serialize)]
struct CategoryEntry {
    error_type: Category,
    description: &'static str,
    suggestions: &'static [&'static str; 4],
}

impl From<Category> for CategoryEntry {
    fn from(category: Category) -> Self {
        Self {
            error_type: category,
            description: category.description(),
            suggestions: category.suggestions(),
        }
    }
}

pub fn execute(only: Option<Category>, json: bool) -> Result<()> {
    let categories: Vec<Category> = match only {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    if json {
        let entries: Vec<CategoryEntry> = categories.into_iter().map(CategoryEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for category in categories {
        ui::section_header(category.as_str());
        println!("{}", category.description());
        for (i, suggestion) in category.suggestions().iter().enumerate() {
            ui::step_message(i + 1, suggestion);
        }
    }

    Ok(())
}
