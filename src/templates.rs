use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, models::RankedMovie};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

pub fn index_page(movies: &[RankedMovie]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-10" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "These are my all-time favourite movies." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700" href="/add" { "Add movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add a movie to get started." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(title: &str, error: Option<&str>) -> String {
    form_page(
        "Add a Movie",
        html! {
            form class="mt-8 space-y-6" method="post" action="/add" {
                div {
                    label class="block text-sm font-medium text-gray-700" for="title" { "Movie title" }
                    input class=(INPUT_CLASS) name="title" id="title" value=(title) required;
                }
                @if let Some(error) = error {
                    p class="text-sm text-red-600" { (error) }
                }
                button class=(BUTTON_CLASS) type="submit" { "Add movie" }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, rating: &str, review: &str, error: Option<&str>) -> String {
    form_page(
        &movie.title,
        html! {
            p class="mt-2 text-gray-600" { "Edit movie rating" }
            form class="mt-8 space-y-6" method="post" action=(format!("/edit?id={}", movie.id)) {
                div {
                    label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating out of 10, e.g. 7.5" }
                    input class=(INPUT_CLASS) name="rating" id="rating" inputmode="decimal" value=(rating) required;
                }
                div {
                    label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                    input class=(INPUT_CLASS) name="review" id="review" maxlength="250" value=(review);
                }
                @if let Some(error) = error {
                    p class="text-sm text-red-600" { (error) }
                }
                button class=(BUTTON_CLASS) type="submit" { "Done" }
            }
        },
    )
}

pub fn not_found_page(what: &str) -> String {
    error_page(&format!("No movie {what} in the catalogue."))
}

pub fn error_page(message: &str) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn form_page(heading: &str, inner: Markup) -> String {
    page(
        heading,
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (heading) }
                        (inner)
                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

fn movie_card(movie: &RankedMovie) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="w-24 h-36 rounded object-cover" src=(movie.image_url) alt=(format!("{} poster", movie.title));
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        span class="mr-2 text-gray-400" { "#" (movie.rank) }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    span class="text-lg font-semibold text-gray-900" { (format_rating(movie.rating)) }
                }
                @if let Some(review) = &movie.review {
                    p class="mt-2 italic text-gray-700" { "\u{201c}" (review) "\u{201d}" }
                }
                p class="mt-2 text-sm text-gray-600" { (movie.description) }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?id={}", movie.id)) { "Update" }
                    form method="post" action="/delete" {
                        input type="hidden" name="title" value=(movie.title);
                        button class="text-red-600 hover:text-red-800" type="submit" { "Delete" }
                    }
                }
            }
        }
    }
}

fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{r:.1}/10"),
        None => "Not rated".to_string(),
    }
}
