//! Add/edit form state. Fields are kept as typed text; coercion happens server-side.

use std::str::FromStr;

use stockroom_inventory::{InventoryItem, ItemDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Quantity,
    Price,
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field '{0}' (expected name, description, quantity, price or category)")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "description" => Ok(FormField::Description),
            "quantity" | "qty" => Ok(FormField::Quantity),
            "price" => Ok(FormField::Price),
            "category" => Ok(FormField::Category),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub price: String,
    pub category: String,
}

impl ItemForm {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            quantity: item.quantity.to_string(),
            price: item.price.to_string(),
            category: item.category.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Quantity => &mut self.quantity,
            FormField::Price => &mut self.price,
            FormField::Category => &mut self.category,
        };
        *slot = value.into();
    }

    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("quantity", &self.quantity),
            ("price", &self.price),
            ("category", &self.category),
        ]
    }

    /// Every field is sent, exactly as typed.
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            quantity: Some(self.quantity.clone().into()),
            price: Some(self.price.clone().into()),
            category: Some(self.category.clone()),
        }
    }
}
