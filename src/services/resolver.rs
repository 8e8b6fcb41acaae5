//! Name-or-ID resolution
//!
//! Users refer to budgets, accounts, categories, category groups and payees by
//! display name or by identifier. The resolver turns either into an
//! identifier. Identifiers pass through untouched; names are looked up with a
//! case-insensitive exact match against a freshly fetched candidate list, and
//! the first match in list order wins.
//!
//! Accounts and payees skip soft-deleted candidates, both when matching and
//! when listing what was available. Budgets, categories and category groups
//! do not: a deleted category can still be matched by name and still shows
//! up in the "Available" list of a not-found error.

use tracing::debug;

use crate::error::{ClinabError, ClinabResult};
use crate::models::ids::{is_budget_sentinel, looks_like_canonical_id, LAST_USED_BUDGET};
use crate::models::EntityKind;

/// Minimal view of a named entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
    pub deleted: bool,
}

impl EntityRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            deleted: false,
        }
    }

    /// Mark this entity as soft-deleted
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }
}

/// A category group with the categories it contains, in service order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRef {
    pub id: String,
    pub name: String,
    pub deleted: bool,
    pub categories: Vec<EntityRef>,
}

/// Where candidate lists come from
///
/// Each call performs one fetch; nothing is cached between calls.
pub trait EntitySource {
    /// All budgets visible to the user
    fn budget_refs(&self) -> ClinabResult<Vec<EntityRef>>;

    /// All accounts of a budget, deleted ones included
    fn account_refs(&self, budget_id: &str) -> ClinabResult<Vec<EntityRef>>;

    /// All payees of a budget, deleted ones included
    fn payee_refs(&self, budget_id: &str) -> ClinabResult<Vec<EntityRef>>;

    /// All category groups of a budget with their categories
    fn category_group_refs(&self, budget_id: &str) -> ClinabResult<Vec<GroupRef>>;
}

/// One matchable entry: the name compared against and the label reported
struct Candidate {
    id: String,
    name: String,
    label: String,
}

impl Candidate {
    fn plain(entity: EntityRef) -> Self {
        Self {
            label: entity.name.clone(),
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Resolves user-typed names or identifiers to identifiers
pub struct Resolver<'a, S: EntitySource + ?Sized> {
    source: &'a S,
}

impl<'a, S: EntitySource + ?Sized> Resolver<'a, S> {
    /// Create a new resolver
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Resolve `token` to an identifier of the given kind.
    ///
    /// `scope` is the budget the entity lives in and is ignored for budgets.
    /// A missing scope means the last-used budget.
    ///
    /// Canonical identifiers are returned unchanged without any fetch, even
    /// if nothing with that identifier exists. The budget aliases
    /// `last-used` and `default` are likewise returned as they are.
    pub fn resolve(&self, kind: EntityKind, scope: Option<&str>, token: &str) -> ClinabResult<String> {
        if looks_like_canonical_id(token) {
            debug!("{} \"{}\" is an identifier, skipping lookup", kind, token);
            return Ok(token.to_string());
        }

        if !kind.is_budget_scoped() && is_budget_sentinel(token) {
            return Ok(token.to_string());
        }

        let scope = scope.unwrap_or(LAST_USED_BUDGET);
        let candidates = self.candidates(kind, scope)?;

        let wanted = token.to_lowercase();
        if let Some(found) = candidates.iter().find(|c| c.name.to_lowercase() == wanted) {
            debug!("resolved {} \"{}\" to {}", kind, token, found.id);
            return Ok(found.id.clone());
        }

        Err(ClinabError::not_found(
            kind,
            token,
            candidates.into_iter().map(|c| c.label).collect(),
        ))
    }

    /// Resolve a budget name or identifier
    pub fn resolve_budget(&self, token: &str) -> ClinabResult<String> {
        self.resolve(EntityKind::Budget, None, token)
    }

    /// Resolve an account name or identifier within a budget
    pub fn resolve_account(&self, budget_id: &str, token: &str) -> ClinabResult<String> {
        self.resolve(EntityKind::Account, Some(budget_id), token)
    }

    /// Resolve a category name or identifier within a budget
    pub fn resolve_category(&self, budget_id: &str, token: &str) -> ClinabResult<String> {
        self.resolve(EntityKind::Category, Some(budget_id), token)
    }

    /// Resolve a category group name or identifier within a budget
    pub fn resolve_category_group(&self, budget_id: &str, token: &str) -> ClinabResult<String> {
        self.resolve(EntityKind::CategoryGroup, Some(budget_id), token)
    }

    /// Resolve a payee name or identifier within a budget
    pub fn resolve_payee(&self, budget_id: &str, token: &str) -> ClinabResult<String> {
        self.resolve(EntityKind::Payee, Some(budget_id), token)
    }

    /// Fetch the candidates for `kind`, flattened in iteration order
    fn candidates(&self, kind: EntityKind, scope: &str) -> ClinabResult<Vec<Candidate>> {
        let candidates = match kind {
            EntityKind::Budget => self
                .source
                .budget_refs()?
                .into_iter()
                .map(Candidate::plain)
                .collect(),
            EntityKind::Account => live(self.source.account_refs(scope)?),
            EntityKind::Payee => live(self.source.payee_refs(scope)?),
            EntityKind::CategoryGroup => self
                .source
                .category_group_refs(scope)?
                .into_iter()
                .map(|group| Candidate {
                    label: group.name.clone(),
                    id: group.id,
                    name: group.name,
                })
                .collect(),
            EntityKind::Category => self
                .source
                .category_group_refs(scope)?
                .into_iter()
                .flat_map(|group| {
                    let group_name = group.name;
                    group.categories.into_iter().map(move |category| Candidate {
                        label: format!("{}/{}", group_name, category.name),
                        id: category.id,
                        name: category.name,
                    })
                })
                .collect(),
        };

        Ok(candidates)
    }
}

fn live(entities: Vec<EntityRef>) -> Vec<Candidate> {
    entities
        .into_iter()
        .filter(|e| !e.deleted)
        .map(Candidate::plain)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    const CHECKING_ID: &str = "3f8d2a1c-5b6e-4c7d-8e9f-0a1b2c3d4e5f";

    /// In-memory source that counts how often it is asked for data
    #[derive(Default)]
    struct FakeSource {
        budgets: Vec<EntityRef>,
        accounts: Vec<EntityRef>,
        payees: Vec<EntityRef>,
        groups: Vec<GroupRef>,
        fetches: Cell<usize>,
        last_scope: RefCell<Option<String>>,
    }

    impl FakeSource {
        fn record(&self, scope: Option<&str>) {
            self.fetches.set(self.fetches.get() + 1);
            *self.last_scope.borrow_mut() = scope.map(str::to_string);
        }
    }

    impl EntitySource for FakeSource {
        fn budget_refs(&self) -> ClinabResult<Vec<EntityRef>> {
            self.record(None);
            Ok(self.budgets.clone())
        }

        fn account_refs(&self, budget_id: &str) -> ClinabResult<Vec<EntityRef>> {
            self.record(Some(budget_id));
            Ok(self.accounts.clone())
        }

        fn payee_refs(&self, budget_id: &str) -> ClinabResult<Vec<EntityRef>> {
            self.record(Some(budget_id));
            Ok(self.payees.clone())
        }

        fn category_group_refs(&self, budget_id: &str) -> ClinabResult<Vec<GroupRef>> {
            self.record(Some(budget_id));
            Ok(self.groups.clone())
        }
    }

    /// Source whose every fetch fails
    struct FailingSource;

    impl EntitySource for FailingSource {
        fn budget_refs(&self) -> ClinabResult<Vec<EntityRef>> {
            Err(ClinabError::Http("connection refused".into()))
        }

        fn account_refs(&self, _budget_id: &str) -> ClinabResult<Vec<EntityRef>> {
            Err(ClinabError::Http("connection refused".into()))
        }

        fn payee_refs(&self, _budget_id: &str) -> ClinabResult<Vec<EntityRef>> {
            Err(ClinabError::Http("connection refused".into()))
        }

        fn category_group_refs(&self, _budget_id: &str) -> ClinabResult<Vec<GroupRef>> {
            Err(ClinabError::Http("connection refused".into()))
        }
    }

    fn group(id: &str, name: &str, categories: Vec<EntityRef>) -> GroupRef {
        GroupRef {
            id: id.into(),
            name: name.into(),
            deleted: false,
            categories,
        }
    }

    fn sample_source() -> FakeSource {
        FakeSource {
            budgets: vec![
                EntityRef::new("b1", "Household"),
                EntityRef::new("b2", "Old Budget").deleted(),
            ],
            accounts: vec![
                EntityRef::new("u1", "Checking"),
                EntityRef::new("u2", "checking"),
                EntityRef::new("u3", "Savings"),
                EntityRef::new("u4", "Old Card").deleted(),
            ],
            payees: vec![
                EntityRef::new("p1", "Grocer"),
                EntityRef::new("p2", "Landlord").deleted(),
            ],
            groups: vec![
                group(
                    "g1",
                    "Bills",
                    vec![
                        EntityRef::new("c0", "Rent"),
                        EntityRef::new("cx", "Cable").deleted(),
                    ],
                ),
                group("g2", "Food", vec![EntityRef::new("c1", "Groceries")]),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_first_match_wins() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        let id = resolver.resolve_account("b1", "CHECKING").unwrap();
        assert_eq!(id, "u1");
        assert_eq!(source.fetches.get(), 1);
    }

    #[test]
    fn test_canonical_id_passes_through_without_fetch() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        for kind in [
            EntityKind::Budget,
            EntityKind::Account,
            EntityKind::Category,
            EntityKind::CategoryGroup,
            EntityKind::Payee,
        ] {
            let id = resolver.resolve(kind, Some("b1"), CHECKING_ID).unwrap();
            assert_eq!(id, CHECKING_ID);
        }

        let upper = CHECKING_ID.to_uppercase();
        assert_eq!(resolver.resolve_payee("b1", &upper).unwrap(), upper);
        assert_eq!(source.fetches.get(), 0);
    }

    #[test]
    fn test_unknown_canonical_id_is_accepted() {
        let source = FakeSource::default();
        let resolver = Resolver::new(&source);
        let id = resolver
            .resolve_account("b1", "00000000-0000-0000-0000-000000000000")
            .unwrap();
        assert_eq!(id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(source.fetches.get(), 0);
    }

    #[test]
    fn test_budget_sentinels_pass_without_fetch() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        assert_eq!(resolver.resolve_budget("last-used").unwrap(), "last-used");
        assert_eq!(resolver.resolve_budget("default").unwrap(), "default");
        assert_eq!(source.fetches.get(), 0);
    }

    #[test]
    fn test_sentinels_are_names_for_other_kinds() {
        let source = FakeSource {
            accounts: vec![EntityRef::new("a9", "Default")],
            ..Default::default()
        };
        let resolver = Resolver::new(&source);

        assert_eq!(resolver.resolve_account("b1", "default").unwrap(), "a9");
        assert_eq!(source.fetches.get(), 1);
    }

    #[test]
    fn test_budget_by_name() {
        let source = sample_source();
        let resolver = Resolver::new(&source);
        assert_eq!(resolver.resolve_budget("household").unwrap(), "b1");
    }

    #[test]
    fn test_not_found_lists_every_candidate() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        let err = resolver.resolve_category("b1", "Dining").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Category \"Dining\" not found. Available categories: Bills/Rent, Bills/Cable, Food/Groceries"
        );
    }

    #[test]
    fn test_not_found_message_for_accounts() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        let err = resolver.resolve_account("b1", "Brokerage").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Account \"Brokerage\" not found. Available accounts: Checking, checking, Savings"
        );
    }

    #[test]
    fn test_not_found_with_empty_list() {
        let source = FakeSource::default();
        let resolver = Resolver::new(&source);

        let err = resolver.resolve_payee("b1", "Anyone").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Payee \"Anyone\" not found. Available payees: "
        );
    }

    #[test]
    fn test_category_matches_case_insensitively_across_groups() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        assert_eq!(resolver.resolve_category("b1", "groceries").unwrap(), "c1");
        assert_eq!(resolver.resolve_category("b1", "RENT").unwrap(), "c0");
    }

    #[test]
    fn test_category_matches_bare_name_not_path() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        let err = resolver.resolve_category("b1", "Food/Groceries").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_category_group_by_name() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        assert_eq!(resolver.resolve_category_group("b1", "food").unwrap(), "g2");
        let err = resolver.resolve_category_group("b1", "Fun").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Category group \"Fun\" not found. Available category groups: Bills, Food"
        );
    }

    #[test]
    fn test_deleted_accounts_and_payees_are_skipped() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        let err = resolver.resolve_account("b1", "Old Card").unwrap_err();
        assert!(err.to_string().ends_with("Available accounts: Checking, checking, Savings"));

        let err = resolver.resolve_payee("b1", "Landlord").unwrap_err();
        assert!(err.to_string().ends_with("Available payees: Grocer"));
    }

    #[test]
    fn test_deleted_budgets_and_categories_still_match_and_list() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        assert_eq!(resolver.resolve_budget("old budget").unwrap(), "b2");
        assert_eq!(resolver.resolve_category("b1", "cable").unwrap(), "cx");

        let err = resolver.resolve_budget("Nope").unwrap_err();
        assert!(err.to_string().ends_with("Available budgets: Household, Old Budget"));
    }

    #[test]
    fn test_missing_scope_means_last_used() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        resolver.resolve(EntityKind::Account, None, "Savings").unwrap();
        assert_eq!(source.last_scope.borrow().as_deref(), Some("last-used"));

        resolver.resolve_payee("b7", "Grocer").unwrap();
        assert_eq!(source.last_scope.borrow().as_deref(), Some("b7"));
    }

    #[test]
    fn test_no_caching_between_calls() {
        let source = sample_source();
        let resolver = Resolver::new(&source);

        resolver.resolve_account("b1", "Savings").unwrap();
        resolver.resolve_account("b1", "Savings").unwrap();
        assert_eq!(source.fetches.get(), 2);
    }

    #[test]
    fn test_fetch_failure_propagates() {
        let resolver = Resolver::new(&FailingSource);

        let err = resolver.resolve_account("b1", "Checking").unwrap_err();
        assert!(matches!(err, ClinabError::Http(_)));
        assert!(!err.is_not_found());

        // identifiers never touch the source
        assert!(resolver.resolve_account("b1", CHECKING_ID).is_ok());
    }
}
