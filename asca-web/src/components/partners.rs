use yew::prelude::*;

const PARTNERS: [&str; 6] = [
    "IUA-ABIDJAN",
    "IADEC",
    "ES2I",
    "CREDIT FEF",
    "ATLANTIS",
    "IVOGROUP",
];

#[function_component(Partners)]
pub fn partners() -> Html {
    html! {
        <div class="mt-16 pb-20">
            <p class="text-center text-gray-500 text-lg">{ "Ils nous font confiance" }</p>
            <div class="mt-8 flex justify-center space-x-10">
                { for PARTNERS.iter().map(|name| html! {
                    <img
                        src={format!("https://via.placeholder.com/120x40?text={}", name.replace(' ', "+"))}
                        alt={*name}
                    />
                }) }
            </div>
        </div>
    }
}
