use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                header class="header" data-header {
                    div class="container" {
                        a href="/" class="logo" { "Homeverse" }
                        nav class="navbar" data-navbar {
                            ul class="navbar-list" {
                                li { a href="/" class="navbar-link" { "Home" } }
                                li { a href="#property" class="navbar-link" { "Property" } }
                            }
                        }
                        button class="nav-toggle-btn" aria-label="Toggle menu" data-nav-toggler { "☰" }
                    }
                }
                main { (content) }
            }
        }
    }
}
