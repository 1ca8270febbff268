use yew::prelude::*;

const STEPS: [(&str, &str); 3] = [
    (
        "Etape 1 : Connectez votre portefeuille",
        "Connectez votre portefeuille pour rejoindre le protocole ASCA et commencer à \
         gérer vos fonds.",
    ),
    (
        "Etape 2 : Contribuez et Économisez",
        "Commencez à contribuer à la tontine de votre communauté et regardez vos \
         économies croître.",
    ),
    (
        "Etape 3 : Participez à la Gouvernance",
        "Votez sur des décisions importantes et contribuez à façonner l'avenir de votre \
         communauté.",
    ),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <div id="how-it-works" class="py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl font-extrabold text-gray-900">{ "Comment ça marche" }</h2>
                <p class="mt-4 text-lg text-gray-500">
                    { "Commencer avec le protocole ASCA est facile. Suivez ces étapes ci-dessous." }
                </p>
                <div class="mt-10 grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for STEPS.iter().map(|(title, body)| html! {
                        <div class="bg-white p-6 rounded-lg shadow-md">
                            <h3 class="text-xl font-bold text-blue-600">{ *title }</h3>
                            <p class="mt-2 text-gray-500">{ *body }</p>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
