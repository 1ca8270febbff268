use asca_core::auth::{AuthForm, AuthMode, LoginField, SignupField};
use web_sys::{HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AuthFormProps {
    pub form: AuthForm,
    pub on_mode_change: Callback<AuthMode>,
    pub on_login_input: Callback<(LoginField, String)>,
    pub on_signup_input: Callback<(SignupField, String)>,
    pub on_submit: Callback<()>,
}

/// Dual-mode login/signup card. Field values and validation state live in
/// `asca_core::auth`; this component only renders them and forwards events.
#[function_component(AuthFormCard)]
pub fn auth_form_card(props: &AuthFormProps) -> Html {
    let mode = props.form.mode();

    let select_mode = |target: AuthMode| {
        let cb = props.on_mode_change.clone();
        Callback::from(move |_: MouseEvent| cb.emit(target))
    };

    let onsubmit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let tab_class = |target: AuthMode| {
        if mode == target {
            "flex-1 py-2 font-bold text-blue-600 border-b-2 border-blue-600"
        } else {
            "flex-1 py-2 text-gray-500 hover:text-blue-600"
        }
    };

    html! {
        <div class="w-full max-w-md bg-white p-6 rounded-lg shadow-lg" id="auth-form">
            <div>
                <p class="text-xl font-bold">{ "Rejoignez la communauté" }</p>
                <p class="mt-2 text-gray-500">
                    { "Soyez les premiers informés des nouvelles fonctionnalités, \
                       des événements communautaires et des offres exclusives." }
                </p>
            </div>
            <div class="mt-4 flex" role="tablist">
                <button
                    type="button"
                    class={tab_class(AuthMode::Login)}
                    onclick={select_mode(AuthMode::Login)}
                >
                    { "Connexion" }
                </button>
                <button
                    type="button"
                    class={tab_class(AuthMode::Signup)}
                    onclick={select_mode(AuthMode::Signup)}
                >
                    { "Inscription" }
                </button>
            </div>
            <form {onsubmit}>
                {
                    match mode {
                        AuthMode::Login => render_login(props),
                        AuthMode::Signup => render_signup(props),
                    }
                }
                if let Some(error) = props.form.error() {
                    <p class="mt-2 text-red-600" role="alert">{ error.to_string() }</p>
                }
                if let Some(notice) = props.form.notice() {
                    <p class="mt-2 text-green-600" role="status">{ notice }</p>
                }
                <button type="submit" class="mt-4 w-full bg-blue-600 text-white py-2 px-4 rounded-lg hover:bg-blue-700">
                    {
                        match mode {
                            AuthMode::Login => "Se connecter",
                            AuthMode::Signup => "S'inscrire",
                        }
                    }
                </button>
                if mode == AuthMode::Signup {
                    <div class="mt-4 text-sm text-gray-600">
                        <p>
                            <strong>{ "*" }</strong>
                            { " Les informations que vous fournissez seront stockées de manière \
                               sécurisée et ne seront pas partagées avec des tiers sans votre \
                               consentement explicite." }
                        </p>
                    </div>
                }
            </form>
        </div>
    }
}

fn render_login(props: &AuthFormProps) -> Html {
    let input = |field: LoginField| {
        let cb = props.on_login_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit((field, input.value()));
            }
        })
    };
    let login = props.form.login();
    html! {
        <>
            <div class="mb-4 mt-4">
                <label for="login-email" class="block text-gray-700">{ "Email Adresse*" }</label>
                <input
                    type="email"
                    id="login-email"
                    class="mt-1 p-2 w-full border border-gray-300 rounded-lg"
                    value={login.email.clone()}
                    oninput={input(LoginField::Email)}
                />
            </div>
            <div class="mb-4">
                <label for="login-password" class="block text-gray-700">{ "Mot de passe*" }</label>
                <input
                    type="password"
                    id="login-password"
                    class="mt-1 p-2 w-full border border-gray-300 rounded-lg"
                    value={login.password.clone()}
                    oninput={input(LoginField::Password)}
                />
            </div>
        </>
    }
}

fn render_signup(props: &AuthFormProps) -> Html {
    let input = |field: SignupField| {
        let cb = props.on_signup_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit((field, input.value()));
            }
        })
    };
    let signup = props.form.signup();
    html! {
        <>
            <div class="mb-4 mt-4">
                <label for="signup-first-name" class="block text-gray-700">{ "Prénom*" }</label>
                <input
                    type="text"
                    id="signup-first-name"
                    class="mt-1 p-2 w-full border border-gray-300 rounded-lg"
                    value={signup.first_name.clone()}
                    oninput={input(SignupField::FirstName)}
                />
            </div>
            <div class="mb-4">
                <label for="signup-last-name" class="block text-gray-700">{ "Nom*" }</label>
                <input
                    type="text"
                    id="signup-last-name"
                    class="mt-1 p-2 w-full border border-gray-300 rounded-lg"
                    value={signup.last_name.clone()}
                    oninput={input(SignupField::LastName)}
                />
            </div>
            <div class="mb-4">
                <label for="signup-email" class="block text-gray-700">{ "Email Adresse*" }</label>
                <input
                    type="email"
                    id="signup-email"
                    class="mt-1 p-2 w-full border border-gray-300 rounded-lg"
                    value={signup.email.clone()}
                    oninput={input(SignupField::Email)}
                />
            </div>
            <div class="mb-4">
                <label for="signup-password" class="block text-gray-700">{ "Mot de passe*" }</label>
                <input
                    type="password"
                    id="signup-password"
                    class="mt-1 p-2 w-full border border-gray-300 rounded-lg"
                    value={signup.password.clone()}
                    oninput={input(SignupField::Password)}
                />
            </div>
            <div class="mb-4">
                <label for="signup-confirm-password" class="block text-gray-700">
                    { "Confirmez le mot de passe*" }
                </label>
                <input
                    type="password"
                    id="signup-confirm-password"
                    class="mt-1 p-2 w-full border border-gray-300 rounded-lg"
                    value={signup.confirm_password.clone()}
                    oninput={input(SignupField::ConfirmPassword)}
                />
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props_with(form: AuthForm) -> AuthFormProps {
        AuthFormProps {
            form,
            on_mode_change: Callback::noop(),
            on_login_input: Callback::noop(),
            on_signup_input: Callback::noop(),
            on_submit: Callback::noop(),
        }
    }

    fn render(form: AuthForm) -> String {
        block_on(LocalServerRenderer::<AuthFormCard>::with_props(props_with(form)).render())
    }

    #[test]
    fn login_mode_shows_two_fields() {
        let html = render(AuthForm::new());
        assert!(html.contains("login-email"));
        assert!(html.contains("login-password"));
        assert!(html.contains("Se connecter"));
        assert!(!html.contains("signup-first-name"));
    }

    #[test]
    fn signup_mode_shows_five_fields() {
        let mut form = AuthForm::new();
        form.set_mode(AuthMode::Signup);
        let html = render(form);
        for id in [
            "signup-first-name",
            "signup-last-name",
            "signup-email",
            "signup-password",
            "signup-confirm-password",
        ] {
            assert!(html.contains(id), "missing field {id}");
        }
        assert!(html.contains("S'inscrire"));
    }

    #[test]
    fn renders_held_validation_error() {
        let mut form = AuthForm::new();
        assert!(form.submit().is_none());
        let html = render(form);
        assert!(html.contains("Tous les champs sont obligatoires."));
    }

    #[test]
    fn renders_signup_acknowledgment() {
        let mut form = AuthForm::new();
        form.set_mode(AuthMode::Signup);
        form.set_signup_field(SignupField::FirstName, String::from("Ama"));
        form.set_signup_field(SignupField::LastName, String::from("Koffi"));
        form.set_signup_field(SignupField::Email, String::from("ama@example.ci"));
        form.set_signup_field(SignupField::Password, String::from("secret"));
        form.set_signup_field(SignupField::ConfirmPassword, String::from("secret"));
        assert!(form.submit().is_some());
        let html = render(form);
        assert!(html.contains("Votre inscription a bien été enregistrée."));
    }
}
