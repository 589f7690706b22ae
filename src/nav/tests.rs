use super::screen::Screen;
use crate::model::{CATEGORIES, EditingFeedback, FeedbackTarget};

/// One instance of every screen variant, with representative payloads.
fn all_screens() -> Vec<Screen> {
    vec![
        Screen::Login,
        Screen::Signup,
        Screen::RegionSelect,
        Screen::Home,
        Screen::Category(CATEGORIES[0].clone()),
        Screen::Search("페트병".to_string()),
        Screen::Feedback(FeedbackTarget {
            trash_detail_id: 42,
            item_name: "페트병".to_string(),
        }),
        Screen::MyFeedback,
        Screen::FeedbackEdit(EditingFeedback {
            id: 7,
            content: "[품목: 페트병 / 지역: 수원시 팔달구] 내용".to_string(),
            trash_detail_id: 42,
        }),
        Screen::QaList,
        Screen::QaDetail(3),
        Screen::QaWrite,
        Screen::Admin,
    ]
}

#[test]
fn initial_screen_is_login() {
    assert_eq!(Screen::default(), Screen::Login);
}

#[test]
fn admin_role_spellings_route_to_dashboard() {
    assert_eq!(Screen::after_login("ADMIN"), Screen::Admin);
    assert_eq!(Screen::after_login("ROLE_ADMIN"), Screen::Admin);
}

#[test]
fn ordinary_roles_route_to_region_select() {
    assert_eq!(Screen::after_login("USER"), Screen::RegionSelect);
    assert_eq!(Screen::after_login("ROLE_USER"), Screen::RegionSelect);
    assert_eq!(Screen::after_login(""), Screen::RegionSelect);
}

#[test]
fn only_login_and_signup_are_public() {
    for screen in all_screens() {
        let public = matches!(screen, Screen::Login | Screen::Signup);
        assert_eq!(screen.requires_auth(), !public, "{:?}", screen);
    }
}

#[test]
fn unauthenticated_navigation_lands_on_login() {
    for screen in all_screens() {
        let resolved = screen.clone().resolve(false, false);
        if screen.requires_auth() {
            assert_eq!(resolved, Screen::Login, "{:?}", screen);
        } else {
            assert_eq!(resolved, screen);
        }
    }
}

#[test]
fn dashboard_is_gated_on_admin_role() {
    assert_eq!(Screen::Admin.resolve(true, false), Screen::Home);
    assert_eq!(Screen::Admin.resolve(true, true), Screen::Admin);
    // Ordinary screens do not care about the admin flag
    assert_eq!(Screen::QaList.resolve(true, false), Screen::QaList);
}

#[test]
fn back_to_home_is_idempotent_and_context_free() {
    // The Home variant carries no payload, so no search query or selected
    // category can survive the transition regardless of the prior screen.
    for _prior in all_screens() {
        let home = Screen::Home.resolve(true, false);
        assert_eq!(home, Screen::Home);
        assert_eq!(home.clone().resolve(true, false), home);
    }
}

#[test]
fn screen_payloads_carry_their_context() {
    match Screen::after_login("USER") {
        Screen::RegionSelect => {}
        other => panic!("unexpected screen: {:?}", other),
    }
    let editing = EditingFeedback {
        id: 7,
        content: "내용".to_string(),
        trash_detail_id: 42,
    };
    if let Screen::FeedbackEdit(payload) = Screen::FeedbackEdit(editing.clone()) {
        // The foreign key the backend update contract requires round-trips intact
        assert_eq!(payload.trash_detail_id, 42);
        assert_eq!(payload, editing);
    } else {
        unreachable!();
    }
}
