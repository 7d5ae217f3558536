use shell::session::SessionState;

use super::*;
use crate::app::route_table;
use crate::config::ShellConfig;

#[test]
fn redirect_displays_nothing() {
    let shown = displayed(&Resolution::<Page>::Redirect("/land".to_owned()));
    assert_eq!(shown, Resolution::Nothing);
}

#[test]
fn rendered_and_placeholder_resolutions_are_displayed_as_is() {
    assert_eq!(displayed(&Resolution::Render(Page::Fare)), Resolution::Render(Page::Fare));
    assert_eq!(displayed(&Resolution::<Page>::Placeholder), Resolution::Placeholder);
}

#[test]
fn sign_out_on_home_stops_showing_fare_page() {
    let mut surface = route_table(&ShellConfig::default());
    surface.arrive("/");
    let signed_in = SessionState::Authenticated {
        identity_id: "rider-1".to_owned(),
    };
    assert_eq!(displayed(&surface.resolve(&signed_in)), Resolution::Render(Page::Fare));

    let after_sign_out = surface.resolve(&SessionState::Anonymous);
    assert_eq!(after_sign_out, Resolution::Redirect("/land".to_owned()));
    assert_eq!(displayed(&after_sign_out), Resolution::Nothing);
}
