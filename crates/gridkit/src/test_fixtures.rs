//! Shared fixtures for crate tests: a product grid row, a country row,
//! and two form models wired to the rule library.

use crate::{
    model::{FieldAccessor, FieldKind, GridRow},
    observe::{FieldRules, Issues, rules},
    types::{Float64, Timestamp},
    value::CellValue,
};
use rust_decimal::Decimal;

///
/// Product
///

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub stock: Option<i64>,
    pub rating: Option<Float64>,
    pub active: bool,
    pub updated_at: Option<Timestamp>,
    pub tags: Vec<String>,
}

impl Product {
    pub fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price: Decimal::ZERO,
            stock: None,
            rating: None,
            active: true,
            updated_at: None,
            tags: Vec::new(),
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }
}

impl GridRow for Product {
    const FIELDS: &'static [FieldAccessor<Self>] = &[
        FieldAccessor::new("Id", FieldKind::Int, |p| p.id.into()),
        FieldAccessor::new("Name", FieldKind::Text, |p| p.name.clone().into()),
        FieldAccessor::new("Price", FieldKind::Decimal, |p| p.price.into()),
        FieldAccessor::new("Stock", FieldKind::Long, |p: &Self| p.stock.into()).nullable(),
        FieldAccessor::new("Rating", FieldKind::Float, |p: &Self| p.rating.into()).nullable(),
        FieldAccessor::new("Active", FieldKind::Bool, |p| p.active.into()),
        FieldAccessor::new("UpdatedAt", FieldKind::Timestamp, |p: &Self| p.updated_at.into())
            .nullable(),
        FieldAccessor::new("Tags", FieldKind::Opaque, |p| {
            CellValue::Opaque(p.tags.join(","))
        }),
    ];
}

///
/// Country
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

impl GridRow for Country {
    const FIELDS: &'static [FieldAccessor<Self>] = &[
        FieldAccessor::new("Code", FieldKind::Text, |c| c.code.clone().into()),
        FieldAccessor::new("Name", FieldKind::Text, |c| c.name.clone().into()),
    ];
}

///
/// LoginForm
///

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl FieldRules for LoginForm {
    const FIELDS: &'static [&'static str] = &["Email", "Password"];

    fn validate_field(&self, field: &str, issues: &mut Issues) {
        match field {
            "Email" => {
                issues.check(rules::required(&self.email, "Email"));
                issues.check(rules::email(&self.email));
            }
            "Password" => {
                issues.check(rules::required(&self.password, "Password"));
                issues.check(rules::min_length(&self.password, 6, "Password"));
            }
            _ => {}
        }
    }
}

///
/// RegistrationForm
///

#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub website: String,
    pub birth_date: Option<Timestamp>,
}

impl FieldRules for RegistrationForm {
    const FIELDS: &'static [&'static str] = &[
        "Username",
        "Email",
        "Phone",
        "Password",
        "ConfirmPassword",
        "Website",
        "BirthDate",
    ];

    fn validate_field(&self, field: &str, issues: &mut Issues) {
        match field {
            "Username" => {
                issues.check(rules::required(&self.username, "Username"));
                issues.check(rules::username(&self.username));
                issues.check(rules::max_length(&self.username, 50, "Username"));
            }
            "Email" => {
                issues.check(rules::required(&self.email, "Email"));
                issues.check(rules::email(&self.email));
            }
            "Phone" => issues.check(rules::phone_number(&self.phone)),
            "Password" => {
                issues.check(rules::required(&self.password, "Password"));
                issues.check(rules::min_length(&self.password, 6, "Password"));
                issues.check(rules::strong_password(&self.password));
            }
            "ConfirmPassword" => issues.check(rules::matches_field(
                &self.confirm_password,
                &self.password,
                "Confirm password",
            )),
            "Website" => issues.check(rules::url(&self.website)),
            "BirthDate" => {
                if let Some(birth_date) = self.birth_date {
                    issues.check(rules::not_in_future(
                        birth_date,
                        Timestamp::from_seconds(1_900_000_000),
                        "Birth date",
                    ));
                }
            }
            _ => {}
        }
    }
}
