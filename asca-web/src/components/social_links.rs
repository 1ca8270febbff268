use yew::prelude::*;

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Twitter", "https://twitter.com/protocole_asca"),
    ("Discord", "https://discord.gg/asca"),
    ("Telegram", "https://t.me/protocole_asca"),
    ("LinkedIn", "https://www.linkedin.com/company/protocole-asca"),
];

#[function_component(SocialMediaLinks)]
pub fn social_media_links() -> Html {
    html! {
        <ul class="flex justify-center space-x-6 mb-4" aria-label="Réseaux sociaux">
            { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                <li>
                    <a href={*href} class="hover:text-blue-400" rel="noopener noreferrer">
                        { *label }
                    </a>
                </li>
            }) }
        </ul>
    }
}
