//! # Domain Types
//!
//! Core domain types shared by the API client, the state slices and views.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Ingredient    │   │      Order      │   │  FeedSnapshot   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  _id            │   │  _id            │   │  orders         │       │
//! │  │  type (kind)    │   │  number         │   │  total          │       │
//! │  │  price          │   │  ingredients[]  │   │  totalToday     │       │
//! │  │  nutrition      │   │  status         │   └─────────────────┘       │
//! │  └────────┬────────┘   └─────────────────┘                             │
//! │           │                                                             │
//! │  ┌────────▼──────────────┐   ┌─────────────────┐                       │
//! │  │ ConstructorIngredient │   │      User       │                       │
//! │  │  Ingredient + id      │   │  name, email    │                       │
//! │  └───────────────────────┘   └─────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! - `Ingredient::id` (`_id` on the wire): catalog id, repeated freely
//! - `ConstructorIngredient::id`: UUID v4 per placement in the constructor,
//!   so the same sauce can be stacked twice and still removed one at a time
//!
//! Field names follow the REST API's JSON exactly (`_id`, `image_mobile`,
//! `totalToday`), so these types double as wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Ingredient
// =============================================================================

/// Ingredient category. Buns go in the bun slot, everything else stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Bun,
    Sauce,
    Main,
}

impl IngredientKind {
    /// All kinds in catalog tab order.
    pub const ALL: [IngredientKind; 3] = [
        IngredientKind::Bun,
        IngredientKind::Sauce,
        IngredientKind::Main,
    ];

    /// Returns true for the bun category.
    #[inline]
    pub const fn is_bun(&self) -> bool {
        matches!(self, IngredientKind::Bun)
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientKind::Bun => write!(f, "Buns"),
            IngredientKind::Sauce => write!(f, "Sauces"),
            IngredientKind::Main => write!(f, "Fillings"),
        }
    }
}

/// A catalog ingredient. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ingredient {
    /// Catalog identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Bun, sauce or main filling.
    #[serde(rename = "type")]
    pub kind: IngredientKind,

    /// Nutrition facts per portion.
    pub proteins: u32,
    pub fat: u32,
    pub carbohydrates: u32,
    pub calories: u32,

    /// Price in whole currency units.
    pub price: i64,

    /// Image URLs in three sizes.
    pub image: String,
    pub image_mobile: String,
    pub image_large: String,
}

impl Ingredient {
    /// Builds an ingredient with empty nutrition facts and images.
    ///
    /// Handy for fixtures; real ingredients come from the catalog.
    pub fn new(id: &str, name: &str, kind: IngredientKind, price: i64) -> Self {
        Ingredient {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            proteins: 0,
            fat: 0,
            carbohydrates: 0,
            calories: 0,
            price,
            image: String::new(),
            image_mobile: String::new(),
            image_large: String::new(),
        }
    }

    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::new(self.price)
    }

    /// Returns true if this ingredient belongs in the bun slot.
    #[inline]
    pub fn is_bun(&self) -> bool {
        self.kind.is_bun()
    }
}

/// An ingredient placed in the constructor.
///
/// `id` identifies this placement; `ingredient.id` still points at the
/// catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConstructorIngredient {
    #[serde(flatten)]
    pub ingredient: Ingredient,

    /// Client-local instance id (UUID v4).
    pub id: String,
}

impl ConstructorIngredient {
    /// Wraps an ingredient with an explicit instance id.
    pub fn with_id(ingredient: Ingredient, id: impl Into<String>) -> Self {
        ConstructorIngredient {
            ingredient,
            id: id.into(),
        }
    }

    /// Catalog id of the wrapped ingredient.
    #[inline]
    pub fn catalog_id(&self) -> &str {
        &self.ingredient.id
    }
}

/// Wraps an ingredient with a freshly generated instance id.
impl From<Ingredient> for ConstructorIngredient {
    fn from(ingredient: Ingredient) -> Self {
        ConstructorIngredient::with_id(ingredient, Uuid::new_v4().to_string())
    }
}

// =============================================================================
// Order
// =============================================================================

/// Kitchen status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted by the server, not yet in the kitchen.
    #[default]
    Created,
    /// Being prepared.
    Pending,
    /// Ready.
    Done,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Created => write!(f, "Created"),
            OrderStatus::Pending => write!(f, "Preparing"),
            OrderStatus::Done => write!(f, "Done"),
        }
    }
}

/// An order as returned by the server. The client never builds one itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,

    /// Catalog ids in stacking order. The bun id appears first and last.
    ///
    /// Order submission answers with full ingredient objects here; only
    /// their `_id` is kept.
    #[serde(deserialize_with = "ingredient_ids")]
    pub ingredients: Vec<String>,

    pub status: OrderStatus,

    /// Server-generated display name ("Space fluorescent burger").
    pub name: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    /// Public sequential order number.
    pub number: u64,
}

/// Accepts `["id", ...]` as well as `[{"_id": "id", ...}, ...]`.
fn ingredient_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IngredientRef {
        Id(String),
        Populated {
            #[serde(rename = "_id")]
            id: String,
        },
    }

    let refs = Vec::<IngredientRef>::deserialize(deserializer)?;
    Ok(refs
        .into_iter()
        .map(|r| match r {
            IngredientRef::Id(id) | IngredientRef::Populated { id } => id,
        })
        .collect())
}

/// Response of a successful order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatedOrder {
    pub order: Order,
    pub name: String,
}

// =============================================================================
// Feed
// =============================================================================

/// The public live feed: recent orders plus counters.
///
/// Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub orders: Vec<Order>,
    /// Orders ever placed.
    pub total: u64,
    /// Orders completed today.
    pub total_today: u64,
}

// =============================================================================
// User
// =============================================================================

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub email: String,
    pub name: String,
}

/// Successful login or registration. Tokens are handed to session storage,
/// only `user` reaches the state tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

// =============================================================================
// Requests
// =============================================================================

/// Registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegisterData {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Profile edit form. Only changed fields are sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Second step of password recovery: new password plus the emailed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResetPasswordData {
    pub password: String,
    pub token: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
