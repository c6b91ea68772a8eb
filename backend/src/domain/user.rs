//! User record data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::daily_stats::DailyStats;
use super::role::{Role, RoleId};
use super::score::guarded_average;
use super::user_validation::{
    UserValidationError, validate_email, validate_name, validate_password,
};

/// Storage-assigned user record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecordId(u64);

impl UserRecordId {
    /// Wrap a raw identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored password representation.
///
/// Hashing happens outside this crate. The buffer is wiped on drop and never
/// appears in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a password string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Borrow the stored representation.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the password is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(Zeroizing::new(value))
    }
}

impl From<Password> for String {
    fn from(value: Password) -> Self {
        value.as_str().to_owned()
    }
}

/// A user account with score statistics, roles, and daily stats.
///
/// Fields are plain data; call [`UserRecord::validate`] at construction and
/// update boundaries before handing a record to storage.
///
/// ## Invariants
/// - `id` is `None` until a storage adapter assigns one and never changes
///   afterwards.
/// - `roles` holds at most one role per [`RoleId`].
/// - The average score is derived, never stored; see
///   [`UserRecord::average_score`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<UserRecordId>,
    email: String,
    password: Password,
    name: String,
    high_score: f64,
    total_of_all_scores: f64,
    number_of_scores: u32,
    #[serde(default)]
    roles: Vec<Role>,
    #[serde(default)]
    stats: DailyStats,
}

impl UserRecord {
    /// Build a record from API-facing values.
    ///
    /// The identifier is left unset for storage to assign; roles and stats
    /// start empty. No validation happens here.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        high_score: f64,
        total_of_all_scores: f64,
        number_of_scores: u32,
    ) -> Self {
        Self {
            id: None,
            email: email.into(),
            password: Password::new(password),
            name: name.into(),
            high_score,
            total_of_all_scores,
            number_of_scores,
            roles: Vec::new(),
            stats: DailyStats::new(),
        }
    }

    /// Fixed demonstration records, in order.
    ///
    /// # Examples
    /// ```
    /// use usr_backend::domain::UserRecord;
    ///
    /// let [edison, master, reed] = UserRecord::sample_records();
    /// assert_eq!(edison.name(), "Thomas Edison");
    /// assert_eq!(master.number_of_scores(), 14);
    /// assert_eq!(reed.total_of_all_scores(), 500.0);
    /// ```
    pub fn sample_records() -> [Self; 3] {
        let mut edison = Self::default();
        edison.set_name("Thomas Edison");
        edison.set_email("toby@gmail.com");
        edison.set_password("123Toby!");
        edison.set_high_score(88.3);
        edison.set_total_of_all_scores(238.2);
        edison.set_number_of_scores(3);

        let mut master = Self::default();
        master.set_name("The Master");
        master.set_email("unbeat_table@gmail.com");
        master.set_password("guessTHIS");
        master.set_high_score(94.1);
        master.set_total_of_all_scores(1220.9);
        master.set_number_of_scores(14);

        let mut reed = Self::default();
        reed.set_name("Drew Reed");
        reed.set_email("drewreedyo@gmail.com");
        reed.set_password("notMyActualPassw0rd");
        reed.set_high_score(84.9);
        reed.set_total_of_all_scores(500.0);
        reed.set_number_of_scores(6);

        [edison, master, reed]
    }

    /// Return this record carrying a storage-assigned identifier.
    ///
    /// Intended for storage adapters; an existing identifier is kept.
    pub fn with_id(mut self, id: UserRecordId) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }

    /// Storage-assigned identifier, if persisted.
    pub fn id(&self) -> Option<UserRecordId> {
        self.id
    }

    /// Login email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Replace the login email.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Stored password representation.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Replace the stored password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Password::new(password);
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Replace the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Best single-game score.
    pub fn high_score(&self) -> f64 {
        self.high_score
    }

    /// Replace the best single-game score.
    pub fn set_high_score(&mut self, high_score: f64) {
        self.high_score = high_score;
    }

    /// Sum of every recorded game score.
    pub fn total_of_all_scores(&self) -> f64 {
        self.total_of_all_scores
    }

    /// Replace the score total.
    pub fn set_total_of_all_scores(&mut self, total_of_all_scores: f64) {
        self.total_of_all_scores = total_of_all_scores;
    }

    /// Number of games played.
    pub fn number_of_scores(&self) -> u32 {
        self.number_of_scores
    }

    /// Replace the game count.
    pub fn set_number_of_scores(&mut self, number_of_scores: u32) {
        self.number_of_scores = number_of_scores;
    }

    /// Average score per game, recomputed on every call.
    ///
    /// See [`guarded_average`] for when the quotient is reported.
    pub fn average_score(&self) -> f64 {
        guarded_average(self.total_of_all_scores, self.number_of_scores)
    }

    /// Add one finished game to the aggregates.
    ///
    /// The first game always sets the high score; later games raise it only
    /// when beaten. The count saturates at `u32::MAX`.
    pub fn record_score(&mut self, score: f64) {
        if self.number_of_scores == 0 || score > self.high_score {
            self.high_score = score;
        }
        self.total_of_all_scores += score;
        self.number_of_scores = self.number_of_scores.saturating_add(1);
    }

    /// Roles held by this record.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Whether a role with `id` is held.
    pub fn has_role(&self, id: RoleId) -> bool {
        self.roles.iter().any(|role| role.id() == id)
    }

    /// Add a role reference, returning `false` when it was already held.
    pub fn add_role(&mut self, role: Role) -> bool {
        if self.has_role(role.id()) {
            return false;
        }
        self.roles.push(role);
        true
    }

    /// Drop a role reference, returning `false` when it was not held.
    pub fn remove_role(&mut self, id: RoleId) -> bool {
        let before = self.roles.len();
        self.roles.retain(|role| role.id() != id);
        self.roles.len() != before
    }

    /// Replace every role reference; duplicates by id keep the first entry.
    pub fn set_roles(&mut self, roles: impl IntoIterator<Item = Role>) {
        self.roles.clear();
        for role in roles {
            self.add_role(role);
        }
    }

    /// Daily statistics.
    pub fn stats(&self) -> &DailyStats {
        &self.stats
    }

    /// Mutable access to the daily statistics.
    pub fn stats_mut(&mut self) -> &mut DailyStats {
        &mut self.stats
    }

    /// Replace the daily statistics.
    pub fn set_stats(&mut self, stats: DailyStats) {
        self.stats = stats;
    }

    /// Run the field validators in order: email, password, name.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_email(&self.email)?;
        validate_password(self.password.as_str())?;
        validate_name(&self.name)
    }
}
