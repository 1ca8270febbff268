use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <div class="w-full max-w-md pr-8">
            <h1 class="text-5xl font-extrabold text-gray-900 leading-tight">
                { "Le protocole ASCA " }
                <span class="text-blue-600">{ "simplifie les épargnes et prêts" }</span>
                { " pour les communautés." }
            </h1>
            <p class="mt-4 text-lg text-gray-500">
                { "La plupart des protocoles de tontine sont sécurisés, mais difficiles à \
                   utiliser. Nous faisons le compromis inverse et nous assurons que vos \
                   actifs soient toujours protégés." }
            </p>
        </div>
    }
}
