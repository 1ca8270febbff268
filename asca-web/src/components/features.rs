use yew::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    (
        "Sécurisé et Transparent",
        "Notre protocole garantit que vos actifs sont protégés et que toutes les \
         transactions sont transparentes et vérifiables.",
    ),
    (
        "Gouvernance Décentralisée",
        "Participez à la gouvernance de votre communauté grâce au vote et à la prise \
         de décision.",
    ),
    (
        "Conformité en temps réel",
        "Les contrôles de conformité automatisés garantissent que tous les participants \
         respectent les normes nécessaires.",
    ),
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <div id="features" class="py-16 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl font-extrabold text-gray-900">{ "Fonctionnalités Clés" }</h2>
                <p class="mt-4 text-lg text-gray-500">
                    { "Découvrez les fonctionnalités puissantes qui font du protocole ASCA le \
                       meilleur choix pour l'épargne et les prêts communautaires." }
                </p>
                <div class="mt-10 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for FEATURES.iter().map(|(title, body)| html! {
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
