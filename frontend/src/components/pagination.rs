use crate::models::Pagination;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub label: String,
    pub page: u32,
    pub current: bool,
}

impl PageLink {
    fn new(label: impl Into<String>, page: u32) -> Self {
        Self {
            label: label.into(),
            page,
            current: false,
        }
    }
}

/// First, previous pages, current, next pages and last, in display order.
pub fn page_links(pagination: &Pagination) -> Vec<PageLink> {
    let current = pagination.current_page;
    let mut links = Vec::new();

    let prev_pages = pagination.prev_pages.as_deref().unwrap_or_default();
    if current > 1 && !prev_pages.contains(&1) {
        links.push(PageLink::new("First", 1));
    }
    links.extend(prev_pages.iter().map(|&page| PageLink::new(page.to_string(), page)));

    links.push(PageLink {
        label: current.to_string(),
        page: current,
        current: true,
    });

    links.extend(
        pagination
            .next_pages
            .iter()
            .map(|&page| PageLink::new(page.to_string(), page)),
    );
    if let Some(last) = pagination.last_page {
        if last > current && !pagination.next_pages.contains(&last) {
            links.push(PageLink::new(format!("Last ({last})"), last));
        }
    }

    links
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub pagination: Pagination,
    pub set_page: Callback<u32>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationProps) -> Html {
    let links = page_links(&props.pagination);

    // Nothing to page through.
    if links.len() == 1 {
        return html! { <div class="pagination"></div> };
    }

    html! {
        <div class="pagination">
            { for links.into_iter().map(|link| {
                if link.current {
                    html! { <span class="pagination-item">{ link.label }</span> }
                } else {
                    let set_page = props.set_page.clone();
                    let page = link.page;
                    let onclick = Callback::from(move |_: MouseEvent| {
                        set_page.emit(page);
                        if let Some(window) = web_sys::window() {
                            window.scroll_to_with_x_and_y(0.0, 0.0);
                        }
                    });
                    html! { <a class="pagination-item" {onclick}>{ link.label }</a> }
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(links: &[PageLink]) -> Vec<&str> {
        links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn middle_page_has_both_sides() {
        let pagination = Pagination {
            current_page: 5,
            prev_pages: Some(vec![3, 4]),
            next_pages: vec![6, 7],
            last_page: Some(20),
            ..Default::default()
        };
        let links = page_links(&pagination);
        assert_eq!(labels(&links), vec!["First", "3", "4", "5", "6", "7", "Last (20)"]);
        assert!(links[3].current);
        assert_eq!(links[6].page, 20);
    }

    #[test]
    fn single_page_is_only_current() {
        let pagination = Pagination {
            current_page: 1,
            ..Default::default()
        };
        assert_eq!(labels(&page_links(&pagination)), vec!["1"]);
    }

    #[test]
    fn no_duplicate_first_or_last() {
        let pagination = Pagination {
            current_page: 2,
            prev_pages: Some(vec![1]),
            next_pages: vec![3],
            last_page: Some(3),
            ..Default::default()
        };
        assert_eq!(labels(&page_links(&pagination)), vec!["1", "2", "3"]);
    }
}
