//! Product request rules and their typed forms.

use catalog_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::ProductId,
};

use crate::validation::{FieldRules, FromInput, Input, Rule, Validator, boolean, integer, number, text};

const INVALID_ID: &str = "ID de producto inválido";
const NAME_REQUIRED: &str = "El nombre del producto es obligatorio";
const PRICE_REQUIRED: &str = "El nombre del precio es obligatorio";
const INVALID_PRICE: &str = "El valor de precio es inválido";
const INVALID_AVAILABILITY: &str = "Valor para disponibilidad no válido";

fn id_rules() -> FieldRules {
    FieldRules::param("id").rule(Rule::Integer, INVALID_ID)
}

fn name_rules() -> FieldRules {
    FieldRules::body("name").rule(Rule::NotEmpty, NAME_REQUIRED)
}

fn price_rules(sign: Rule) -> FieldRules {
    FieldRules::body("price")
        .rule(Rule::NotEmpty, PRICE_REQUIRED)
        .rule(Rule::Numeric, INVALID_PRICE)
        .rule(sign, INVALID_PRICE)
}

/// Rules for routes addressing a product by id only.
pub(crate) fn product_id() -> Validator {
    Validator::new().field(id_rules())
}

pub(crate) fn create_product() -> Validator {
    Validator::new()
        .field(name_rules())
        .field(price_rules(Rule::Positive))
}

/// Full replacement accepts a zero price, unlike creation.
pub(crate) fn update_product() -> Validator {
    Validator::new()
        .field(id_rules())
        .field(name_rules())
        .field(price_rules(Rule::NonNegative))
        .field(FieldRules::body("availability").rule(Rule::Boolean, INVALID_AVAILABILITY))
}

fn id_from_input(input: &Input) -> Option<ProductId> {
    integer(input.param("id")).map(ProductId::from_i64)
}

impl FromInput for ProductId {
    fn from_input(input: &Input) -> Option<Self> {
        id_from_input(input)
    }
}

impl FromInput for NewProduct {
    fn from_input(input: &Input) -> Option<Self> {
        Some(NewProduct {
            name: text(input.body("name"))?.into_owned(),
            price: number(input.body("price"))?,
        })
    }
}

/// Target id and replacement fields of a full update.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ReplaceProduct {
    pub(crate) id: ProductId,
    pub(crate) update: ProductUpdate,
}

impl FromInput for ReplaceProduct {
    fn from_input(input: &Input) -> Option<Self> {
        Some(ReplaceProduct {
            id: id_from_input(input)?,
            update: ProductUpdate {
                name: text(input.body("name"))?.into_owned(),
                price: number(input.body("price"))?,
                availability: boolean(input.body("availability"))?,
            },
        })
    }
}
