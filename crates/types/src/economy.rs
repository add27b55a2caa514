//! Transactions, subscriptions and licenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{LicenseGroupId, TransactionId, UserId};

/// Lifecycle state of a transaction or subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// In good standing.
    Active,
    /// Payment failed.
    Failed,
    /// Lapsed.
    Expired,
    /// Reversed by the payment provider.
    Chargeback,
}

/// Billing period of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPeriod {
    /// Hourly.
    Hour,
    /// Daily.
    Day,
    /// Weekly.
    Week,
    /// Monthly.
    Month,
    /// Yearly.
    Year,
}

/// A purchasable subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Price.
    pub amount: f64,
    /// Description text.
    pub description: String,
    /// Google Play plan ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_plan_id: Option<String>,
    /// Google Play product ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_product_id: Option<String>,
    /// Plan ID.
    pub id: String,
    /// Oculus store SKU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oculus_sku: Option<String>,
    /// Billing period.
    pub period: SubscriptionPeriod,
    /// Pico store SKU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pico_sku: Option<String>,
    /// Steam item ID.
    pub steam_item_id: String,
    /// Plan tier.
    pub tier: f64,
}

/// A subscription held by the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscription {
    /// Whether the subscription is active.
    pub active: bool,
    /// Price paid.
    pub amount: f64,
    /// When the subscription was created.
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Description text.
    pub description: String,
    /// When the subscription lapses.
    pub expires: DateTime<Utc>,
    /// Subscription ID.
    pub id: String,
    /// Whether it was gifted.
    pub is_gift: bool,
    /// License groups it grants.
    pub license_groups: Vec<LicenseGroupId>,
    /// Billing period.
    pub period: SubscriptionPeriod,
    /// When the subscription started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts: Option<String>,
    /// Lifecycle state.
    pub status: TransactionStatus,
    /// Steam item ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_item_id: Option<String>,
    /// Which store it came from; currently `Steam` or `Admin`.
    pub store: String,
    /// Plan tier.
    pub tier: f64,
    /// Transaction that paid for it.
    pub transaction_id: TransactionId,
    /// When the subscription was last updated.
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

/// Steam wallet details attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSteamWalletInfo {
    /// Wallet country code.
    pub country: String,
    /// Wallet currency code.
    pub currency: String,
    /// Wallet state.
    pub state: String,
    /// Wallet status.
    pub status: String,
}

/// Steam order details attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSteamInfo {
    /// Steam order ID.
    pub order_id: String,
    /// Steam user ID.
    pub steam_id: String,
    /// Always empty.
    pub steam_url: String,
    /// Steam transaction ID; distinct from the platform transaction ID.
    pub trans_id: String,
    /// Wallet details.
    pub wallet_info: TransactionSteamWalletInfo,
}

/// A recurring billing agreement attached to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAgreement {
    /// Agreement text identifier.
    pub agreement: String,
    /// Agreement ID.
    pub agreement_id: String,
    /// Billing type.
    pub billing_type: String,
    /// Currency code.
    pub currency: String,
    /// When the agreement ends.
    pub end_date: String,
    /// Consecutive failed payment attempts.
    pub failed_attempts: f64,
    /// Billing frequency.
    pub frequency: f64,
    /// Billed item ID.
    pub item_id: f64,
    /// Last amount billed.
    pub last_amount: f64,
    /// VAT portion of the last amount.
    pub last_amount_vat: f64,
    /// When the last payment happened.
    pub last_payment: String,
    /// When the next payment is due.
    pub next_payment: String,
    /// Outstanding balance.
    pub outstanding: f64,
    /// Billing period label.
    pub period: String,
    /// Recurring amount.
    pub recurring_amt: f64,
    /// When the agreement started.
    pub start_date: String,
    /// Provider-side status string; not a [`TransactionStatus`].
    pub status: String,
    /// When the agreement was created.
    pub time_created: String,
}

/// A purchase transaction, usually between the platform and Steam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Recurring billing agreement, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement: Option<TransactionAgreement>,
    /// When the transaction was created.
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Error message, or empty.
    pub error: String,
    /// Transaction ID.
    pub id: TransactionId,
    /// Whether it was a gift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_gift: Option<bool>,
    /// Whether it was paid in platform tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_tokens: Option<bool>,
    /// Whether it ran against the sandbox.
    pub sandbox: bool,
    /// Lifecycle state.
    pub status: TransactionStatus,
    /// Steam order details, if paid via Steam.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam: Option<TransactionSteamInfo>,
    /// Plan purchased.
    pub subscription: Subscription,
    /// When the transaction was last updated.
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
    /// Buyer's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_display_name: Option<String>,
    /// Buyer's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

/// What a license grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LicenseType {
    /// An avatar.
    Avatar,
    /// A group of further licenses.
    LicenseGroup,
    /// A permission.
    Permission,
    /// A product.
    Product,
}

/// How a licensed avatar may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseAction {
    /// May be worn.
    Wear,
    /// May be owned.
    Have,
}

/// One grant inside a license group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// Usage granted.
    pub for_action: LicenseAction,
    /// ID of the granted object; interpretation depends on `for_type`.
    pub for_id: String,
    /// Name of the granted object.
    pub for_name: String,
    /// Kind of the granted object.
    pub for_type: LicenseType,
}

/// A named bundle of licenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseGroup {
    /// Description text.
    pub description: String,
    /// License group ID.
    pub id: LicenseGroupId,
    /// The grants.
    pub licenses: Vec<License>,
    /// Display name.
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_transaction_status_roundtrip() {
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Chargeback).unwrap(),
            "\"chargeback\""
        );
    }

    #[test]
    fn test_license_type_camel_case() {
        assert_eq!(
            serde_json::to_string(&LicenseType::LicenseGroup).unwrap(),
            "\"licenseGroup\""
        );
    }
}
