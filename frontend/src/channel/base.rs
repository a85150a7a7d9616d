use crate::api::video::VideoType;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub const FIRST_PAGE: u32 = 1;

/// Page cursor shared by a channel layout with the page rendered inside it.
#[derive(Clone, PartialEq)]
pub struct PageCursor {
    pub current_page: u32,
    pub set_page: Callback<u32>,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            current_page: FIRST_PAGE,
            set_page: Callback::noop(),
        }
    }
}

/// Page picked on one route. It only applies while that route is shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageSelection {
    route: Option<Route>,
    page: u32,
}

impl PageSelection {
    pub fn new(route: Option<Route>, page: u32) -> Self {
        Self {
            route,
            page: page.max(FIRST_PAGE),
        }
    }

    /// Page for `route`; any other channel or tab starts over at the first page.
    pub fn page_for(&self, route: Option<&Route>) -> u32 {
        if self.route.as_ref() == route {
            self.page
        } else {
            FIRST_PAGE
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelBaseProps {
    pub channel_id: String,
    pub children: Children,
}

#[function_component(ChannelBase)]
pub fn channel_base(props: &ChannelBaseProps) -> Html {
    let selection = use_state_eq(PageSelection::default);
    let route = use_route::<Route>();

    let cursor = PageCursor {
        current_page: selection.page_for(route.as_ref()),
        set_page: {
            let selection = selection.clone();
            Callback::from(move |page: u32| selection.set(PageSelection::new(route.clone(), page)))
        },
    };

    let tabs = [VideoType::Videos, VideoType::Streams, VideoType::Shorts];

    html! {
        <ContextProvider<PageCursor> context={cursor}>
            <div class="boxed-content">
                <div class="info-box-item child-page-nav">
                    { for tabs.into_iter().map(|video_type| html! {
                        <Link<Route> to={Route::for_channel(props.channel_id.clone(), video_type)}>
                            <h3>{ video_type.display_name() }</h3>
                        </Link<Route>>
                    })}
                </div>
            </div>
            { for props.children.iter() }
        </ContextProvider<PageCursor>>
    }
}

#[hook]
pub fn use_page_cursor() -> PageCursor {
    use_context::<PageCursor>().unwrap_or_default()
}
