use yew::prelude::*;

use crate::components::social_links::SocialMediaLinks;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-800 py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-white">
                <SocialMediaLinks />
                <p>{ "© 2024 Protocole ASCA. Tous droits réservés." }</p>
            </div>
        </footer>
    }
}
