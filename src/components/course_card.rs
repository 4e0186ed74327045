use maud::{html, Markup};

use crate::course::Course;

pub fn render(course: &Course) -> Markup {
    html! {
        div class="h-full flex flex-col gap-2 bg-white dark:bg-neutral-800 dark:text-white rounded-lg shadow-lg overflow-hidden" {
            @if let Some(image_url) = &course.image_url {
                img class="w-full h-40 object-cover" src=(image_url) alt=(course.title) {}
            }
            div class="flex flex-col gap-1 p-2 grow" {
                div class="flex justify-between items-center" {
                    p class="font-mono text-sm" { (course.code()) }
                    @if let Some(credits) = course.credits {
                        p class="text-xs bg-blue-400 dark:bg-blue-800 rounded-lg px-2" { (credits) " units" }
                    }
                }
                h3 class="text-xl font-bold" { (course.title) }
                @if let Some(instructor) = &course.instructor {
                    p class="text-sm text-neutral-600 dark:text-neutral-400" { (instructor) }
                }
                @if let Some(description) = &course.description {
                    p class="text-sm" { (description) }
                }
            }
        }
    }
}
