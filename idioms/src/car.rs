use serde::{Deserialize, Serialize};

use crate::CarError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    model: String,
    year: u16,
    price: u32,
}

impl Car {
    pub fn new(model: impl Into<String>, year: u16, price: u32) -> Self { Self { model: model.into(), year, price } }

    /// Builds a car from raw text fields, as typed into a form
    pub fn from_inputs(model: &str, year: &str, price: &str) -> Result<Self, CarError> {
        let model = model.trim();
        if model.is_empty() {
            return Err(CarError::EmptyModel);
        }
        let year = year.trim().parse().map_err(|_| CarError::InvalidYear(year.to_string()))?;
        let price = price.trim().parse().map_err(|_| CarError::InvalidPrice(price.to_string()))?;
        Ok(Self::new(model, year, price))
    }

    pub fn model(&self) -> &str { &self.model }
    pub fn year(&self) -> u16 { self.year }
    pub fn price(&self) -> u32 { self.price }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{} from {} costs {}", self.model, self.year, self.price) }
}
