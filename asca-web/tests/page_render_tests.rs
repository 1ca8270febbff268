use asca_core::auth::{AuthForm, AuthMode, SignupField};
use asca_core::network::Network;
use asca_web::pages::landing::{LandingPage, LandingPageProps};
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn landing_props() -> LandingPageProps {
    LandingPageProps {
        connected: false,
        connecting: false,
        network: Network::Mainnet,
        form: AuthForm::new(),
        wallet_notice: None,
        on_connect: Callback::noop(),
        on_disconnect: Callback::noop(),
        on_network_change: Callback::noop(),
        on_mode_change: Callback::noop(),
        on_login_input: Callback::noop(),
        on_signup_input: Callback::noop(),
        on_submit: Callback::noop(),
    }
}

fn render_landing(props: LandingPageProps) -> String {
    block_on(LocalServerRenderer::<LandingPage>::with_props(props).render())
}

#[test]
fn landing_renders_marketing_sections() {
    let html = render_landing(landing_props());
    assert!(html.contains("Le protocole ASCA"));
    assert!(html.contains("Fonctionnalités Clés"));
    assert!(html.contains("Comment ça marche"));
    assert!(html.contains("Témoignages de la communauté"));
    assert!(html.contains("Ils nous font confiance"));
    assert!(html.contains("© 2024 Protocole ASCA. Tous droits réservés."));
}

#[test]
fn landing_offers_wallet_connect_while_disconnected() {
    let html = render_landing(landing_props());
    assert!(html.contains("Connectez votre portefeuille"));
    assert!(!html.contains("Déconnexion"));
}

#[test]
fn landing_offers_disconnect_once_connected() {
    let props = LandingPageProps {
        connected: true,
        ..landing_props()
    };
    let html = render_landing(props);
    assert!(html.contains("Déconnexion"));
    assert!(!html.contains("Connectez votre portefeuille"));
}

#[test]
fn landing_surfaces_wallet_failure_notice() {
    let props = LandingPageProps {
        wallet_notice: Some(AttrValue::Static(
            "Échec de la connexion au portefeuille. Veuillez réessayer.",
        )),
        ..landing_props()
    };
    let html = render_landing(props);
    assert!(html.contains("Échec de la connexion au portefeuille. Veuillez réessayer."));
}

#[test]
fn landing_keeps_in_progress_signup_input_visible() {
    let mut form = AuthForm::new();
    form.set_mode(AuthMode::Signup);
    form.set_signup_field(SignupField::FirstName, String::from("Ama"));
    form.set_mode(AuthMode::Login);
    form.set_mode(AuthMode::Signup);
    let props = LandingPageProps {
        form,
        ..landing_props()
    };
    let html = render_landing(props);
    assert!(html.contains("value=\"Ama\"") || html.contains("Ama"));
}

#[test]
fn landing_renders_validation_error_from_form_state() {
    let mut form = AuthForm::new();
    assert!(form.submit().is_none());
    let props = LandingPageProps {
        form,
        ..landing_props()
    };
    let html = render_landing(props);
    assert!(html.contains("Tous les champs sont obligatoires."));
}
