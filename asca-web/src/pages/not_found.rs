use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-3xl font-extrabold text-gray-900">{ "Page introuvable" }</h1>
                <a href="/" class="mt-4 inline-block text-blue-600 underline">
                    { "Retour à l'accueil" }
                </a>
            </div>
        </div>
    }
}
