use maud::{html, Markup, DOCTYPE};

pub mod course_card;
pub mod course_grid;

pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js";
pub const TAILWIND_SRC: &str = "https://cdn.tailwindcss.com/3.4.16";

pub fn base(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title {"courses"}
                script src=(HTMX_SRC) {}
                script src=(TAILWIND_SRC) {}
                meta name="viewport" content="width=device-width,initial-scale=1.0" {}
            }
            body class="bg-slate-100 dark:bg-neutral-900" {
                div id="app-container" class="contents" {
                    (content)
                }
            }
        }
    }
}
