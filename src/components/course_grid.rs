use maud::{html, Markup};

use crate::{components::course_card, course::Course};

// one column on narrow screens, two on medium, three on wide
pub const GRID_CLASS: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4";

pub fn render(courses: &[Course]) -> Markup {
    render_with(courses, course_card::render)
}

pub fn render_with(courses: &[Course], card: impl Fn(&Course) -> Markup) -> Markup {
    html! {
        div id="course-grid" class=(GRID_CLASS) {
            @for course in courses {
                (item(course, &card))
            }
        }
    }
}

/// A single grid cell, identified only by the course id.
pub fn item(course: &Course, card: impl Fn(&Course) -> Markup) -> Markup {
    html! {
        div id={"course-" (course.id)} data-key=(course.id) {
            (card(course))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::course::CourseId;

    use super::*;

    fn course(id: u64) -> Course {
        Course {
            id: CourseId(id),
            subject_code: "CSC".to_string(),
            course_code: format!("{}", 100 + id),
            title: format!("Course {id}"),
            description: None,
            instructor: None,
            credits: Some(1.5),
            image_url: None,
        }
    }

    fn keys(html: &str) -> Vec<String> {
        html.split(r#"data-key=""#)
            .skip(1)
            .map(|rest| rest.split('"').next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn one_child_per_course_in_order() {
        let courses = vec![course(1), course(2)];
        let html = render(&courses).into_string();

        assert_eq!(keys(&html), vec!["1", "2"]);
        assert!(html.contains(r#"id="course-1""#));
        assert!(html.contains(r#"id="course-2""#));
        assert!(html.find("course-1").unwrap() < html.find("course-2").unwrap());
    }

    #[test]
    fn empty_input_renders_empty_container() {
        let html = render(&[]).into_string();

        assert_eq!(
            html,
            r#"<div id="course-grid" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"></div>"#
        );
        assert!(keys(&html).is_empty());
    }

    #[test]
    fn grid_columns_are_responsive() {
        assert_eq!(GRID_CLASS, "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4");

        let html = render(&[course(1)]).into_string();
        assert!(html.starts_with(r#"<div id="course-grid" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">"#));
    }

    #[test]
    fn child_count_matches_input_length() {
        for n in [0, 1, 5, 40] {
            let courses: Vec<Course> = (0..n).map(course).collect();
            let html = render_with(&courses, |_| html! { span {} }).into_string();

            assert_eq!(keys(&html).len(), n as usize);
            assert_eq!(html.matches("<span></span>").count(), n as usize);
        }
    }

    #[test]
    fn reordering_keeps_identity_with_content() {
        let forward = vec![course(1), course(2), course(3)];
        let reversed: Vec<Course> = forward.iter().rev().cloned().collect();

        let card = |c: &Course| html! { p { (c.title) } };
        let a = render_with(&forward, card).into_string();
        let b = render_with(&reversed, card).into_string();

        assert_eq!(keys(&a), vec!["1", "2", "3"]);
        assert_eq!(keys(&b), vec!["3", "2", "1"]);
        for id in 1..=3 {
            let cell = item(&course(id), card).into_string();
            assert!(a.contains(&cell));
            assert!(b.contains(&cell));
        }
    }

    #[test]
    fn card_receives_records_unmodified() {
        let courses = vec![course(4), course(9)];
        let seen = RefCell::new(Vec::new());

        render_with(&courses, |c| {
            seen.borrow_mut().push(c.clone());
            html! {}
        });

        assert_eq!(seen.into_inner(), courses);
    }

    #[test]
    fn duplicate_ids_still_render_every_course() {
        let courses = vec![course(1), course(1)];
        let html = render(&courses).into_string();

        assert_eq!(keys(&html), vec!["1", "1"]);
    }
}
