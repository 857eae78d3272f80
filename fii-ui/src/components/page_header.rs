//! Page header with logo link and title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Page title
    pub title: String,
    /// Where the logo links to
    #[props(default = String::new())]
    pub home_url: String,
    /// Logo image; the link shows its text when empty
    #[props(default = String::new())]
    pub logo_src: String,
    #[props(default = String::new())]
    pub logo_alt: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header {
            div {
                if !props.home_url.is_empty() {
                    a {
                        href: "{props.home_url}",
                        if props.logo_src.is_empty() {
                            "{props.logo_alt}"
                        } else {
                            img { src: "{props.logo_src}", alt: "{props.logo_alt}" }
                        }
                    }
                }
                h1 { "{props.title}" }
            }
        }
    }
}
