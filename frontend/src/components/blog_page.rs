use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

use crate::content::blog_posts;

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "janvier", 2 => "février", 3 => "mars", 4 => "avril",
        5 => "mai", 6 => "juin", 7 => "juillet", 8 => "août",
        9 => "septembre", 10 => "octobre", 11 => "novembre", 12 => "décembre",
        _ => "janvier",
    }
}

/// "2025-03-12" -> "12 mars 2025"; unparseable dates pass through as-is.
fn format_date(iso_date: &str) -> String {
    match NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => format!("{} {} {}", date.day(), month_name(date.month()), date.year()),
        Err(_) => iso_date.to_string(),
    }
}

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let posts = blog_posts();
    let open_post = use_state(|| None::<String>);

    html! {
        <section class="blog-page">
            <h1>{"Le Blog"}</h1>
            <div class="blog-list">
                {for posts.iter().map(|post| {
                    let expanded = open_post.as_deref() == Some(post.id.as_str());
                    let toggle = {
                        let open_post = open_post.clone();
                        let id = post.id.clone();
                        Callback::from(move |_| {
                            if open_post.as_deref() == Some(id.as_str()) {
                                open_post.set(None);
                            } else {
                                open_post.set(Some(id.clone()));
                            }
                        })
                    };
                    html! {
                        <article class="blog-card" key={post.id.clone()}>
                            <img src={post.image.clone()} alt={post.title.clone()} />
                            <div class="blog-body">
                                <p class="muted">
                                    {format!("{} · {}", format_date(&post.date), post.author)}
                                </p>
                                <h2>{&post.title}</h2>
                                <p>{if expanded { post.content.clone() } else { post.excerpt.clone() }}</p>
                                <button class="link-button" onclick={toggle}>
                                    {if expanded { "Réduire" } else { "Lire la suite" }}
                                </button>
                            </div>
                        </article>
                    }
                })}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_french() {
        assert_eq!(format_date("2025-03-12"), "12 mars 2025");
        assert_eq!(format_date("2024-01-01"), "1 janvier 2024");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }
}
