//! Role and resource permission matrix for an HR information system.
//!
//! This crate is the single source of truth for "who may do what to which
//! resource" in the HRIS. Every page of the application asks the matrix
//! whether to render a control, allow a navigation or permit an action; the
//! settings page mutates the matrix and persists it on an explicit save.
//!
//! In the sense of this implementation:
//! * a *role* is a class of user (HR manager, line manager, employee, ...).
//! * a *resource* is a protected functional area (payslips, settings, ...).
//! * a *permission* is a granted capability on a resource.
//!
//! Roles, resources and permissions are closed enums known at compile time.
//! Adding a role or resource is a code change, which buys exhaustiveness
//! checking everywhere the matrix is consumed instead of silent misses on a
//! misspelled key.
//!
//! # The permission model
//!
//! Permissions are ordered by increasing scope:
//!
//! <table>
//! <tr><th>Permission</th> <th>Grants</th></tr>
//! <tr><td>View</td>       <td>see the resource at all</td></tr>
//! <tr><td>Create</td>     <td>add new records</td></tr>
//! <tr><td>Edit</td>       <td>change existing records</td></tr>
//! <tr><td>Approve</td>    <td>sign off workflows (leave, evaluations)</td></tr>
//! <tr><td>Manage</td>     <td>total control, implies all of the above</td></tr>
//! </table>
//!
//! The ordering is not a chain of prerequisites, but two implication rules
//! are enforced on every mutation so the matrix can never contradict itself:
//!
//! * granting anything above `View` also grants `View` — an elevated
//!   permission is useless on a resource you cannot see;
//! * granting `Manage` grants the full set, and revoking `Manage` clears the
//!   full set — `Manage` is the "everything" switch, not one bit among five.
//!
//! Revoking `View` clears every dependent permission but leaves a standing
//! `Manage` grant untouched. That asymmetry is deliberate and matches the
//! shipped behaviour of the HRIS; see [`PermissionsMatrix::set`].
//!
//! # Denied by default
//!
//! A (role, resource) pair that was never granted anything is simply absent
//! from the matrix and reads as the empty permission set. Until somebody
//! grants a permission, every check answers `false`.
//!
//! # Checking access
//!
//! Reads go through [`AccessControl::can`] (or [`PermissionsMatrix::can`]
//! when only the raw matrix is at hand). The check is a plain set lookup,
//! total over the enum domains, and cannot fail:
//!
//! ```rust
//! use hris_acl::{AccessControl, Permission, PermissionsMatrix, Resource, Role};
//!
//! let acl = AccessControl::new(PermissionsMatrix::new());
//!
//! // nothing granted yet, everything is denied
//! assert!(!acl.can(Role::Employee, Resource::Payslips, Permission::View));
//! ```
//!
//! # Granting and revoking
//!
//! All mutation goes through a single operation that applies the implication
//! rules. Granting `Edit` pulls in `View`:
//!
//! ```rust
//! use hris_acl::{AccessControl, Permission, PermissionsMatrix, Resource, Role};
//!
//! let mut acl = AccessControl::new(PermissionsMatrix::new());
//!
//! acl.set_permission(Role::Manager, Resource::Employees, Permission::Edit, true);
//!
//! assert!( acl.can(Role::Manager, Resource::Employees, Permission::Edit));
//! assert!( acl.can(Role::Manager, Resource::Employees, Permission::View));
//! assert!(!acl.can(Role::Manager, Resource::Employees, Permission::Approve));
//! ```
//!
//! Granting `Manage` grants everything, and revoking `View` afterwards keeps
//! exactly the `Manage` bit:
//!
//! ```rust
//! use hris_acl::{AccessControl, Permission, PermissionsMatrix, Resource, Role};
//!
//! let mut acl = AccessControl::new(PermissionsMatrix::new());
//!
//! acl.set_permission(Role::Manager, Resource::Employees, Permission::Manage, true);
//! for permission in Permission::ALL.iter().copied() {
//!     assert!(acl.can(Role::Manager, Resource::Employees, permission));
//! }
//!
//! acl.set_permission(Role::Manager, Resource::Employees, Permission::View, false);
//! assert!( acl.can(Role::Manager, Resource::Employees, Permission::Manage));
//! assert!(!acl.can(Role::Manager, Resource::Employees, Permission::View));
//! ```
//!
//! # Shipped defaults
//!
//! [`PermissionsMatrix::with_defaults`] seeds the matrix the way the HRIS
//! ships: administrators manage everything, the HR manager runs the HR
//! records, line managers approve leave and write evaluations, employees see
//! their own surfaces and auditors see everything:
//!
//! ```rust
//! use hris_acl::{Permission, PermissionsMatrix, Resource, Role};
//!
//! let matrix = PermissionsMatrix::with_defaults();
//!
//! assert!( matrix.can(Role::Admin, Resource::Settings, Permission::Manage));
//! assert!( matrix.can(Role::Manager, Resource::LeaveRequests, Permission::Approve));
//! assert!( matrix.can(Role::Auditor, Resource::AuditLog, Permission::View));
//! assert!(!matrix.can(Role::Employee, Resource::Settings, Permission::View));
//! ```
//!
//! # Auditing changes
//!
//! [`PermissionsMatrix::diff`] compares two matrix snapshots and yields one
//! [`Change`] record per (role, resource) pair whose permission sets differ.
//! The records render as the human-readable lines the audit log expects:
//!
//! ```rust
//! use hris_acl::{Permission, PermissionsMatrix, Resource, Role};
//!
//! let before = PermissionsMatrix::new();
//! let mut after = before.clone();
//! after.set(Role::Employee, Resource::Payslips, Permission::View, true);
//!
//! let changes: Vec<_> = before.diff(&after).collect();
//!
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes[0].to_string(), "employee/payslips: [] -> [view]");
//! ```
//!
//! # Persistence
//!
//! The matrix lives in memory for the session and is persisted as a whole on
//! an explicit save. [`AccessControl`] owns the live matrix plus the last
//! persisted snapshot; [`AccessControl::save`] writes through a
//! [`MatrixStore`] and, only on success, reports every diff entry to an
//! [`AuditSink`]. A failed save leaves the in-memory matrix untouched so the
//! user can retry:
//!
//! ```no_run
//! use hris_acl::{AccessControl, JsonFileStore, LogAudit, Permission,
//!                PermissionsMatrix, Resource, Role};
//!
//! let store = JsonFileStore::new("permissions.json");
//! let mut acl = AccessControl::load(&store)
//!     .unwrap_or_else(|_| AccessControl::new(PermissionsMatrix::with_defaults()));
//!
//! acl.set_permission(Role::Auditor, Resource::Payslips, Permission::View, true);
//! acl.save(&store, &mut LogAudit)?;
//! # Ok::<(), hris_acl::Error>(())
//! ```
//!
//! The persisted shape is the nested `role -> resource -> [permission]`
//! mapping with snake_case keys, e.g.
//! `{"hr_manager": {"employees": ["view", "edit"]}}`. Unknown keys in a
//! persisted document are rejected on load rather than silently creating
//! matrix entries.

use log::{info, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;


// Roles, resources and permissions ///////////////////////////////////////////////////////////////


/// A class of user of the HRIS. Fixed, closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    HrManager,
    Manager,
    Employee,
    Auditor,
} // enum Role

impl Role {

    /// Every role, in a stable order. Handy for rendering the settings grid.
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::HrManager,
        Role::Manager,
        Role::Employee,
        Role::Auditor,
    ];

    /// The canonical snake_case key used in persisted documents and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin     => "admin",
            Role::HrManager => "hr_manager",
            Role::Manager   => "manager",
            Role::Employee  => "employee",
            Role::Auditor   => "auditor",
        } // match
    } // as_str

} // impl Role

impl fmt::Display for Role {

    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    } // fmt

} // impl fmt::Display for Role

impl FromStr for Role {

    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin"      => Ok(Role::Admin),
            "hr_manager" => Ok(Role::HrManager),
            "manager"    => Ok(Role::Manager),
            "employee"   => Ok(Role::Employee),
            "auditor"    => Ok(Role::Auditor),
            _ => {
                warn!("unknown role key: {}", value);
                Err(Error::UnknownRole(String::from(value)))
            }, // _
        } // match
    } // from_str

} // impl FromStr for Role

/// A protected functional area of the HRIS. Fixed, closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Employees,
    LeaveRequests,
    Payslips,
    Assets,
    Onboarding,
    Evaluations,
    Discipline,
    Reports,
    Settings,
    AuditLog,
} // enum Resource

impl Resource {

    /// Every resource, in a stable order. Handy for rendering the settings grid.
    pub const ALL: [Resource; 10] = [
        Resource::Employees,
        Resource::LeaveRequests,
        Resource::Payslips,
        Resource::Assets,
        Resource::Onboarding,
        Resource::Evaluations,
        Resource::Discipline,
        Resource::Reports,
        Resource::Settings,
        Resource::AuditLog,
    ];

    /// The canonical snake_case key used in persisted documents and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Employees     => "employees",
            Resource::LeaveRequests => "leave_requests",
            Resource::Payslips      => "payslips",
            Resource::Assets        => "assets",
            Resource::Onboarding    => "onboarding",
            Resource::Evaluations   => "evaluations",
            Resource::Discipline    => "discipline",
            Resource::Reports       => "reports",
            Resource::Settings      => "settings",
            Resource::AuditLog      => "audit_log",
        } // match
    } // as_str

} // impl Resource

impl fmt::Display for Resource {

    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    } // fmt

} // impl fmt::Display for Resource

impl FromStr for Resource {

    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "employees"      => Ok(Resource::Employees),
            "leave_requests" => Ok(Resource::LeaveRequests),
            "payslips"       => Ok(Resource::Payslips),
            "assets"         => Ok(Resource::Assets),
            "onboarding"     => Ok(Resource::Onboarding),
            "evaluations"    => Ok(Resource::Evaluations),
            "discipline"     => Ok(Resource::Discipline),
            "reports"        => Ok(Resource::Reports),
            "settings"       => Ok(Resource::Settings),
            "audit_log"      => Ok(Resource::AuditLog),
            _ => {
                warn!("unknown resource key: {}", value);
                Err(Error::UnknownResource(String::from(value)))
            }, // _
        } // match
    } // from_str

} // impl FromStr for Resource

/// A granted capability on a resource, ordered by increasing scope.
///
/// `Manage` implies all others and all others except `View` imply `View`.
/// The implications are enforced by [`PermissionsMatrix::set`], not by the
/// values themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    View,
    Create,
    Edit,
    Approve,
    Manage,
} // enum Permission

impl Permission {

    /// Every permission, in increasing order of scope.
    pub const ALL: [Permission; 5] = [
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Approve,
        Permission::Manage,
    ];

    /// The canonical snake_case key used in persisted documents and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::View    => "view",
            Permission::Create  => "create",
            Permission::Edit    => "edit",
            Permission::Approve => "approve",
            Permission::Manage  => "manage",
        } // match
    } // as_str

} // impl Permission

impl fmt::Display for Permission {

    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    } // fmt

} // impl fmt::Display for Permission

impl FromStr for Permission {

    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view"    => Ok(Permission::View),
            "create"  => Ok(Permission::Create),
            "edit"    => Ok(Permission::Edit),
            "approve" => Ok(Permission::Approve),
            "manage"  => Ok(Permission::Manage),
            _ => {
                warn!("unknown permission key: {}", value);
                Err(Error::UnknownPermission(String::from(value)))
            }, // _
        } // match
    } // from_str

} // impl FromStr for Permission

/// The permissions granted to one role on one resource. Ordered so that
/// persisted documents and audit lines come out deterministic.
pub type PermissionSet = BTreeSet<Permission>;

fn fmt_permissions(set: &PermissionSet) -> String {
    set.iter().map(Permission::as_str).collect::<Vec<_>>().join(", ")
} // fmt_permissions


// PermissionsMatrix //////////////////////////////////////////////////////////////////////////////


/// The complete Role x Resource -> set-of-Permission mapping governing access
/// control for the whole application.
///
/// A pair absent from the mapping is equivalent to an empty permission set.
/// All mutation goes through [`set`](Self::set), which enforces the
/// cross-permission implication rules, so the matrix can never hold a
/// self-contradictory state such as `Edit` without `View`.
///
/// Serializes transparently as the nested `role -> resource -> [permission]`
/// mapping described in the crate documentation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionsMatrix {
    grants: BTreeMap<Role, BTreeMap<Resource, PermissionSet>>,
} // struct PermissionsMatrix

impl PermissionsMatrix {

    /// Creates an empty matrix. Everything is denied until granted.
    pub fn new() -> Self {
        trace!("creating empty permissions matrix");
        PermissionsMatrix { grants: BTreeMap::new() }
    } // new

    /// Creates the matrix the HRIS ships with. Built through [`set`](Self::set)
    /// so the implication rules hold by construction.
    pub fn with_defaults() -> Self {
        trace!("creating default permissions matrix");
        let mut matrix = Self::new();

        // administrators manage everything, auditors see everything
        for resource in Resource::ALL.iter().copied() {
            matrix.set(Role::Admin, resource, Permission::Manage, true);
            matrix.set(Role::Auditor, resource, Permission::View, true);
        } // for

        // HR runs the day-to-day records but does not own system settings
        for resource in [
            Resource::Employees,
            Resource::LeaveRequests,
            Resource::Payslips,
            Resource::Assets,
            Resource::Onboarding,
            Resource::Evaluations,
            Resource::Discipline,
            Resource::Reports,
        ].iter().copied() {
            matrix.set(Role::HrManager, resource, Permission::Manage, true);
        } // for
        matrix.set(Role::HrManager, Resource::Settings, Permission::View, true);

        // line managers approve leave and run evaluations for their teams
        matrix.set(Role::Manager, Resource::Employees, Permission::View, true);
        matrix.set(Role::Manager, Resource::LeaveRequests, Permission::Approve, true);
        matrix.set(Role::Manager, Resource::Evaluations, Permission::Create, true);
        matrix.set(Role::Manager, Resource::Evaluations, Permission::Edit, true);
        matrix.set(Role::Manager, Resource::Discipline, Permission::Create, true);
        matrix.set(Role::Manager, Resource::Reports, Permission::View, true);

        // employees work with their own records
        matrix.set(Role::Employee, Resource::Employees, Permission::View, true);
        matrix.set(Role::Employee, Resource::LeaveRequests, Permission::Create, true);
        matrix.set(Role::Employee, Resource::Payslips, Permission::View, true);
        matrix.set(Role::Employee, Resource::Assets, Permission::View, true);
        matrix.set(Role::Employee, Resource::Onboarding, Permission::View, true);

        matrix
    } // with_defaults

    /// Returns true if permission is granted to role on resource. Absent
    /// entries read as empty sets, so this is total and cannot fail.
    #[inline]
    pub fn can(&self, role: Role, resource: Resource, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .and_then(|cells| cells.get(&resource))
            .map_or(false, |cell| cell.contains(&permission))
    } // can

    /// Returns a snapshot of the permission set for (role, resource). Absent
    /// entries read as the empty set.
    pub fn permissions(&self, role: Role, resource: Resource) -> PermissionSet {
        self.grants
            .get(&role)
            .and_then(|cells| cells.get(&resource))
            .cloned()
            .unwrap_or_default()
    } // permissions

    /// Grants or revokes permission for role on resource, enforcing the
    /// implication rules:
    ///
    /// * granting anything above `View` also grants `View`;
    /// * granting `Manage` grants the full permission set;
    /// * revoking `Manage` clears the entire set;
    /// * revoking `View` clears everything except a standing `Manage`.
    ///
    /// The last rule is asymmetric on purpose: `Manage` survives the loss of
    /// baseline view access, matching the shipped behaviour of the HRIS.
    /// Entries are created on demand and pruned when their set becomes empty,
    /// so absent and empty stay interchangeable.
    pub fn set(&mut self, role: Role, resource: Resource, permission: Permission, granted: bool) {
        trace!("{} {} for {} on {}",
               if granted { "granting" } else { "revoking" }, permission, role, resource);
        let cells = self.grants.entry(role).or_default();
        let cell  = cells.entry(resource).or_default();

        if granted {
            cell.insert(permission);
            match permission {
                Permission::Manage => { cell.extend(Permission::ALL.iter().copied()); },
                Permission::View   => {},
                _                  => { cell.insert(Permission::View); },
            } // match
        } else {
            cell.remove(&permission);
            match permission {
                Permission::Manage => cell.clear(),
                Permission::View => {
                    let manage = cell.contains(&Permission::Manage);

                    cell.clear();
                    if manage {
                        cell.insert(Permission::Manage);
                    } // if
                },
                _ => {},
            } // match
        } // else

        if cell.is_empty() {
            cells.remove(&resource);
        } // if
        if cells.is_empty() {
            self.grants.remove(&role);
        } // if
    } // set

    /// Compares this snapshot against a newer one and yields a [`Change`]
    /// record for every (role, resource) pair whose permission sets differ.
    ///
    /// The sequence is lazy, finite (bounded by roles x resources) and makes
    /// a single pass; call again with the same snapshots to re-iterate. Used
    /// for audit-log messages, not itself invariant-bearing.
    pub fn diff<'a>(&'a self, newer: &'a PermissionsMatrix) -> impl Iterator<Item = Change> + 'a {
        trace!("diffing permissions matrix snapshots");
        let mut pairs: BTreeSet<(Role, Resource)> = BTreeSet::new();

        for (role, cells) in self.grants.iter().chain(newer.grants.iter()) {
            for resource in cells.keys() {
                pairs.insert((*role, *resource));
            } // for
        } // for

        pairs.into_iter().filter_map(move |(role, resource)| {
            let old = self.permissions(role, resource);
            let new = newer.permissions(role, resource);

            if old == new {
                None
            } else {
                Some(Change { role, resource, old, new })
            } // else
        })
    } // diff

} // impl PermissionsMatrix

/// One audit record produced by [`PermissionsMatrix::diff`]: the old and new
/// permission sets for a (role, resource) pair that changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    pub role:     Role,
    pub resource: Resource,
    pub old:      PermissionSet,
    pub new:      PermissionSet,
} // struct Change

impl fmt::Display for Change {

    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}/{}: [{}] -> [{}]",
               self.role, self.resource,
               fmt_permissions(&self.old), fmt_permissions(&self.new))
    } // fmt

} // impl fmt::Display for Change


// Persistence and audit boundaries ///////////////////////////////////////////////////////////////


/// External storage collaborator holding the persisted matrix. Loaded once at
/// application start, replaced wholesale on an explicit save.
pub trait MatrixStore {

    /// Reads the entire persisted matrix.
    fn load(&self) -> Result<PermissionsMatrix, Error>;

    /// Writes the entire matrix, replacing the persisted copy.
    fn save(&self, matrix: &PermissionsMatrix) -> Result<(), Error>;

} // trait MatrixStore

/// [`MatrixStore`] backed by a JSON document on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
} // struct JsonFileStore

impl JsonFileStore {

    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileStore { path: path.as_ref().to_path_buf() }
    } // new

} // impl JsonFileStore

impl MatrixStore for JsonFileStore {

    fn load(&self) -> Result<PermissionsMatrix, Error> {
        trace!("loading permissions matrix from {}", self.path.display());
        let data = fs::read_to_string(&self.path).map_err(|err| {
            warn!("failed to read {}: {}", self.path.display(), err);
            Error::Load(err.to_string())
        })?;

        serde_json::from_str(&data).map_err(|err| {
            warn!("failed to parse {}: {}", self.path.display(), err);
            Error::Load(err.to_string())
        })
    } // load

    fn save(&self, matrix: &PermissionsMatrix) -> Result<(), Error> {
        trace!("saving permissions matrix to {}", self.path.display());
        let data = serde_json::to_string_pretty(matrix)
            .map_err(|err| Error::Save(err.to_string()))?;

        fs::write(&self.path, data).map_err(|err| {
            warn!("failed to write {}: {}", self.path.display(), err);
            Error::Save(err.to_string())
        })
    } // save

} // impl MatrixStore for JsonFileStore

/// External audit log collaborator. Receives one record per changed
/// (role, resource) pair after every successful save.
pub trait AuditSink {

    fn record(&mut self, change: &Change);

} // trait AuditSink

/// [`AuditSink`] routing the summary lines through the `log` facade at info
/// level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAudit;

impl AuditSink for LogAudit {

    fn record(&mut self, change: &Change) {
        info!("permissions changed: {}", change);
    } // record

} // impl AuditSink for LogAudit


// AccessControl //////////////////////////////////////////////////////////////////////////////////


/// Owner of the live permissions matrix for a session.
///
/// Holds the working matrix plus the last persisted snapshot. Reads go
/// through [`can`](Self::can), edits through
/// [`set_permission`](Self::set_permission), and [`save`](Self::save)
/// persists the matrix and reports the accumulated changes to the audit log.
/// There is no ambient global state; whoever needs the matrix gets handed a
/// reference to this value.
#[derive(Clone, Debug)]
pub struct AccessControl {
    matrix:    PermissionsMatrix,
    persisted: PermissionsMatrix,
} // struct AccessControl

impl AccessControl {

    /// Creates an access control owner around a matrix, treating it as the
    /// persisted baseline.
    pub fn new(matrix: PermissionsMatrix) -> Self {
        trace!("creating access control");
        let persisted = matrix.clone();

        AccessControl { matrix, persisted }
    } // new

    /// Loads the matrix from the store. On a first run with nothing persisted
    /// yet this fails with [`Error::Load`]; the caller picks the fallback,
    /// typically [`PermissionsMatrix::with_defaults`].
    pub fn load(store: &dyn MatrixStore) -> Result<Self, Error> {
        trace!("loading access control from store");
        let matrix = store.load()?;

        Ok(Self::new(matrix))
    } // load

    /// The live matrix, for rendering the settings grid.
    #[inline]
    pub fn matrix(&self) -> &PermissionsMatrix {
        &self.matrix
    } // matrix

    /// Returns true if permission is granted to role on resource.
    #[inline]
    pub fn can(&self, role: Role, resource: Resource, permission: Permission) -> bool {
        self.matrix.can(role, resource, permission)
    } // can

    /// Grants or revokes a permission; see [`PermissionsMatrix::set`] for the
    /// implication rules. The edit is in memory only until
    /// [`save`](Self::save) is called.
    #[inline]
    pub fn set_permission(&mut self, role: Role, resource: Resource, permission: Permission, granted: bool) {
        self.matrix.set(role, resource, permission, granted);
    } // set_permission

    /// Returns true if there are edits not yet persisted.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.matrix != self.persisted
    } // is_dirty

    /// Discards all edits since the last successful save.
    pub fn revert(&mut self) {
        trace!("reverting unsaved permission edits");
        self.matrix = self.persisted.clone();
    } // revert

    /// Persists the matrix and, only on success, reports one [`Change`] per
    /// modified (role, resource) pair to the audit sink and refreshes the
    /// baseline. On failure the in-memory matrix keeps its edits and the save
    /// can simply be retried.
    pub fn save(&mut self, store: &dyn MatrixStore, audit: &mut dyn AuditSink) -> Result<(), Error> {
        trace!("saving access control");
        store.save(&self.matrix)?;

        for change in self.persisted.diff(&self.matrix) {
            audit.record(&change);
        } // for
        self.persisted = self.matrix.clone();
        Ok(())
    } // save

} // impl AccessControl


// Error //////////////////////////////////////////////////////////////////////////////////////////


#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    UnknownRole(String),
    UnknownResource(String),
    UnknownPermission(String),
    Load(String),
    Save(String),
} // enum Error

impl fmt::Display for Error {

    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::UnknownRole(s) =>
                write!(f, "Unknown role: {}", s),
            Error::UnknownResource(s) =>
                write!(f, "Unknown resource: {}", s),
            Error::UnknownPermission(s) =>
                write!(f, "Unknown permission: {}", s),
            Error::Load(s) =>
                write!(f, "Failed to load permissions: {}", s),
            Error::Save(s) =>
                write!(f, "Failed to save permissions: {}", s),
        } // match
    } // fmt

} // impl fmt::Display for Error

impl std::error::Error for Error {}


// Tests //////////////////////////////////////////////////////////////////////////////////////////


// mod tests
