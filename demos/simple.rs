use hris_acl::*;

fn main() -> Result<(), Error> {
    env_logger::init();

    let store = JsonFileStore::new(std::env::temp_dir().join("hris-permissions.json"));

    // first run: nothing persisted yet, start from the shipped defaults
    let mut acl = AccessControl::load(&store)
        .unwrap_or_else(|_| AccessControl::new(PermissionsMatrix::with_defaults()));

    // administrators manage everything out of the box
    assert!(acl.can(Role::Admin, Resource::Settings, Permission::Manage));

    // line managers may approve leave but not touch payroll
    assert!( acl.can(Role::Manager, Resource::LeaveRequests, Permission::Approve));
    assert!(!acl.can(Role::Manager, Resource::Payslips, Permission::View));

    // let auditors into payroll; the edit stays in memory until saved
    acl.set_permission(Role::Auditor, Resource::Payslips, Permission::Edit, true);

    // granting edit pulled in view as well
    assert!(acl.can(Role::Auditor, Resource::Payslips, Permission::View));

    // persist and report the change to the audit log
    acl.save(&store, &mut LogAudit)?;
    assert!(!acl.is_dirty());

    Ok(())
} // main
