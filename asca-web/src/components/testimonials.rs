use yew::prelude::*;

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "\"Le protocole ASCA a transformé nos économies communautaires. Il est facile à \
         utiliser et complètement sécurisé !\"",
        "- Leader Communautaire",
    ),
    (
        "\"Pouvoir accéder à des prêts sans passer par les banques traditionnelles a été \
         une véritable révolution pour nous.\"",
        "- Utilisateur",
    ),
    (
        "\"La gouvernance sur chaîne assure la transparence dans chaque décision prise.\"",
        "- Membre",
    ),
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <div id="testimonials" class="py-16 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl font-extrabold text-gray-900">
                    { "Témoignages de la communauté" }
                </h2>
                <p class="mt-4 text-lg text-gray-500">
                    { "Découvrez ce que d'autres communautés disent de leur expérience avec le \
                       protocole ASCA." }
                </p>
                <div class="mt-10 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                        <div class="bg-white p-6 rounded-lg shadow-md">
                            <p class="text-lg text-gray-700">{ *quote }</p>
                            <p class="mt-4 text-gray-500">{ *author }</p>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
