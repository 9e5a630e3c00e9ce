//! services/app/src/store/admin.rs
//!
//! Remaining back-office mutations: branding and contact records, user
//! tier/role management, subscription-plan editing, and FAQs. User
//! mutations that hit the signed-in user update the live session copy too,
//! so the effect is visible without a re-login.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use bookbites_core::catalog;
use bookbites_core::domain::{
    AppConfig, ContactInfo, FaqItem, SubscriptionPlan, SubscriptionTier, User, UserRef,
};
use bookbites_core::ports::{PortError, PortResult};
use bookbites_core::users;

use super::{encode, keys, AppStore};

impl AppStore {
    //=====================================================================================
    // Branding & Contact
    //=====================================================================================

    pub async fn update_app_config(&mut self, config: AppConfig) {
        self.app_config = config;
        let encoded = encode(&self.app_config);
        self.write_through(keys::CONFIG, encoded).await;
    }

    pub async fn update_contact_info(&mut self, info: ContactInfo) {
        self.contact_info = info;
        let encoded = encode(&self.contact_info);
        self.write_through(keys::CONTACT_INFO, encoded).await;
    }

    //=====================================================================================
    // User Tier & Roles
    //=====================================================================================

    pub async fn update_user_tier(
        &mut self,
        target: UserRef,
        tier: SubscriptionTier,
        expiry: Option<DateTime<Utc>>,
    ) {
        self.mutate_user(&target, move |user| {
            user.tier = tier;
            user.tier_expiry = expiry;
        })
        .await;
    }

    pub async fn promote_to_manager(&mut self, target: UserRef, is_manager: bool) {
        self.mutate_user(&target, move |user| {
            user.is_store_manager = is_manager;
        })
        .await;
    }

    pub async fn promote_to_super_admin(&mut self, target: UserRef, is_super: bool) {
        self.mutate_user(&target, move |user| {
            user.is_super_admin = is_super;
        })
        .await;
    }

    /// Applies one mutation to the global list and, when the target is the
    /// signed-in user, to the live session copy.
    async fn mutate_user<F>(&mut self, target: &UserRef, mutate: F)
    where
        F: Fn(&mut User),
    {
        self.all_users = users::apply(std::mem::take(&mut self.all_users), target, &mutate);
        if let Some(current) = self.current_user.as_mut() {
            if target.matches(current) {
                mutate(current);
            }
        }
        self.persist_users().await;
    }

    //=====================================================================================
    // Subscription Plans
    //=====================================================================================

    /// Replaces the plan set wholesale. The tier set is fixed: a
    /// replacement that adds, drops, or reorders tiers is rejected.
    pub async fn update_subscription_plans(
        &mut self,
        plans: Vec<SubscriptionPlan>,
    ) -> PortResult<()> {
        let existing: Vec<SubscriptionTier> = self.subscription_plans.iter().map(|p| p.id).collect();
        let incoming: Vec<SubscriptionTier> = plans.iter().map(|p| p.id).collect();
        if existing != incoming {
            return Err(PortError::Validation(
                "the subscription tier set is fixed".to_string(),
            ));
        }
        self.subscription_plans = plans;
        let encoded = encode(&self.subscription_plans);
        self.write_through(keys::PLANS, encoded).await;
        Ok(())
    }

    /// Edits one feature line in place. Out-of-range indexes are a silent
    /// no-op.
    pub async fn set_plan_feature(&mut self, tier: SubscriptionTier, index: usize, text: &str) {
        if let Some(plan) = self.subscription_plans.iter_mut().find(|p| p.id == tier) {
            if let Some(feature) = plan.features.get_mut(index) {
                *feature = text.to_string();
            }
        }
        let encoded = encode(&self.subscription_plans);
        self.write_through(keys::PLANS, encoded).await;
    }

    pub async fn add_plan_feature(&mut self, tier: SubscriptionTier, text: &str) {
        if let Some(plan) = self.subscription_plans.iter_mut().find(|p| p.id == tier) {
            plan.features.push(text.to_string());
        }
        let encoded = encode(&self.subscription_plans);
        self.write_through(keys::PLANS, encoded).await;
    }

    pub async fn remove_plan_feature(&mut self, tier: SubscriptionTier, index: usize) {
        if let Some(plan) = self.subscription_plans.iter_mut().find(|p| p.id == tier) {
            if index < plan.features.len() {
                plan.features.remove(index);
            }
        }
        let encoded = encode(&self.subscription_plans);
        self.write_through(keys::PLANS, encoded).await;
    }

    //=====================================================================================
    // FAQs
    //=====================================================================================

    pub async fn add_faq(&mut self, question: &str, answer: &str) -> PortResult<()> {
        if question.trim().is_empty() || answer.trim().is_empty() {
            return Err(PortError::Validation(
                "FAQ question and answer are required".to_string(),
            ));
        }
        self.faqs.push(FaqItem {
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        });
        let encoded = encode(&self.faqs);
        self.write_through(keys::FAQS, encoded).await;
        Ok(())
    }

    pub async fn delete_faq(&mut self, id: &str) {
        self.faqs = catalog::remove_by_id(std::mem::take(&mut self.faqs), id);
        let encoded = encode(&self.faqs);
        self.write_through(keys::FAQS, encoded).await;
    }
}
