use super::*;

#[test]
fn admin_sees_management_and_admin_entries() {
    let destinations = destinations_for(Some(Role::Admin));
    assert!(destinations.contains(&Destination::NewsManagement));
    assert!(destinations.contains(&Destination::UserAdmin));
    assert!(destinations.contains(&Destination::GroupAdmin));
    assert!(!destinations.contains(&Destination::NewsHome));
}

#[test]
fn teacher_sees_news_management_but_no_admin_entries() {
    let destinations = destinations_for(Some(Role::Teacher));
    assert!(destinations.contains(&Destination::NewsManagement));
    assert!(!destinations.contains(&Destination::UserAdmin));
    assert!(!destinations.contains(&Destination::GroupAdmin));
}

#[test]
fn student_gets_read_only_news_and_no_admin_entries() {
    let destinations = destinations_for(Some(Role::Student));
    assert!(destinations.contains(&Destination::NewsHome));
    assert!(!destinations.contains(&Destination::NewsManagement));
    assert!(!destinations.contains(&Destination::UserAdmin));
    assert!(!destinations.contains(&Destination::GroupAdmin));
}

#[test]
fn parent_matches_student_visibility() {
    assert_eq!(
        destinations_for(Some(Role::Parent)),
        destinations_for(Some(Role::Student))
    );
}

#[test]
fn every_role_shares_the_common_entries() {
    for role in [Role::Admin, Role::Teacher, Role::Student, Role::Parent] {
        let destinations = destinations_for(Some(role));
        assert_eq!(destinations[0], Destination::Profile);
        assert!(destinations.contains(&Destination::Messages));
        assert!(destinations.contains(&Destination::Absences));
        assert!(destinations.contains(&Destination::Reports));
    }
}

#[test]
fn missing_role_sees_nothing() {
    assert!(destinations_for(None).is_empty());
}

#[test]
fn only_admin_entries_are_in_the_admin_section() {
    assert!(Destination::UserAdmin.is_admin_section());
    assert!(Destination::GroupAdmin.is_admin_section());
    assert!(!Destination::Profile.is_admin_section());
    assert!(!Destination::NewsManagement.is_admin_section());
}

#[test]
fn paths_match_the_route_table() {
    assert_eq!(Destination::Profile.path(), "/usuario");
    assert_eq!(Destination::Messages.path(), "/mensajes");
    assert_eq!(Destination::Absences.path(), "/faltas");
    assert_eq!(Destination::Reports.path(), "/informes");
    assert_eq!(Destination::NewsManagement.path(), "/noticias");
    assert_eq!(Destination::NewsHome.path(), "/");
    assert_eq!(Destination::UserAdmin.path(), "/admin/usuarios");
    assert_eq!(Destination::GroupAdmin.path(), "/admin/grupos");
}
