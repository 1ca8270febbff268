use asca_core::auth::{AuthForm, AuthMode, LoginField, SignupField};
use asca_core::network::Network;
use yew::prelude::*;

use crate::components::auth_form::AuthFormCard;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::navbar::Navbar;
use crate::components::partners::Partners;
use crate::components::testimonials::Testimonials;

#[derive(Properties, PartialEq, Clone)]
pub struct LandingPageProps {
    pub connected: bool,
    pub connecting: bool,
    pub network: Network,
    pub form: AuthForm,
    #[prop_or_default]
    pub wallet_notice: Option<AttrValue>,
    pub on_connect: Callback<()>,
    pub on_disconnect: Callback<()>,
    pub on_network_change: Callback<String>,
    pub on_mode_change: Callback<AuthMode>,
    pub on_login_input: Callback<(LoginField, String)>,
    pub on_signup_input: Callback<(SignupField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let background = format!(
        "background-image: url({}); background-repeat: no-repeat; \
         background-size: cover; background-position: center;",
        crate::paths::asset_path("static/img/bg-hero.jpg")
    );
    // "Connexion" in the navbar brings the login form forward.
    let show_login = props.on_mode_change.reform(|()| AuthMode::Login);

    html! {
        <div class="relative bg-white" style={background}>
            <Navbar
                connected={props.connected}
                connecting={props.connecting}
                network={props.network}
                on_connect={props.on_connect.clone()}
                on_disconnect={props.on_disconnect.clone()}
                on_network_change={props.on_network_change.clone()}
                on_show_login={show_login}
            />
            if let Some(notice) = &props.wallet_notice {
                <div class="mx-6 p-3 bg-red-100 text-red-700 rounded-lg" role="status">
                    { notice.clone() }
                </div>
            }
            <div class="pt-20 pb-16 flex justify-center items-center">
                <Hero />
                <AuthFormCard
                    form={props.form.clone()}
                    on_mode_change={props.on_mode_change.clone()}
                    on_login_input={props.on_login_input.clone()}
                    on_signup_input={props.on_signup_input.clone()}
                    on_submit={props.on_submit.clone()}
                />
            </div>
            <Features />
            <HowItWorks />
            <Testimonials />
            <Partners />
            <Footer />
        </div>
    }
}
