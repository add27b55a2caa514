//! Steam transactions, subscriptions and license groups.

use reqwest::Method;
use vrchat_types::{
    LicenseGroup, LicenseGroupId, Subscription, Transaction, TransactionId, UserSubscription,
};

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Lists the account's Steam transactions.
    ///
    /// `GET /Steam/transactions`
    pub async fn get_steam_transactions(&self) -> Result<Vec<Transaction>> {
        self.request(Method::GET, "/Steam/transactions", &[]).await
    }

    /// Fetches one Steam transaction.
    ///
    /// `GET /Steam/transactions/{transactionId}`
    pub async fn get_steam_transaction(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<Transaction> {
        self.request(
            Method::GET,
            &format!("/Steam/transactions/{transaction_id}"),
            &[],
        )
        .await
    }

    /// Lists the subscriptions the account currently holds.
    ///
    /// `GET /auth/user/subscription`
    pub async fn get_current_subscriptions(&self) -> Result<Vec<UserSubscription>> {
        self.request(Method::GET, "/auth/user/subscription", &[])
            .await
    }

    /// Lists the purchasable subscription plans.
    ///
    /// `GET /subscriptions`
    pub async fn get_subscriptions(&self) -> Result<Vec<Subscription>> {
        self.request(Method::GET, "/subscriptions", &[]).await
    }

    /// Fetches a license group.
    ///
    /// `GET /licenseGroups/{licenseGroupId}`
    pub async fn get_license_group(
        &self,
        license_group_id: &LicenseGroupId,
    ) -> Result<LicenseGroup> {
        self.request(
            Method::GET,
            &format!("/licenseGroups/{license_group_id}"),
            &[],
        )
        .await
    }
}
