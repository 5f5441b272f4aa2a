pub mod comparison;
pub mod property_card;

pub use comparison::comparison_table;
pub use property_card::property_card;
