use crate::api::user_config::{load_user_config, update_user_config};
use crate::user_config::{UserConfig, UserConfigPatch};
use std::rc::Rc;
use yew::prelude::*;

/// What the provider hands to its subtree: the current config and a way to patch it.
#[derive(Clone, PartialEq, Default)]
pub struct UserConfigHandle {
    pub config: UserConfig,
    pub update: Callback<UserConfigPatch>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserConfigState {
    pub config: UserConfig,
}

pub enum UserConfigAction {
    Loaded(UserConfig),
    Patch(UserConfigPatch),
}

impl Reducible for UserConfigState {
    type Action = UserConfigAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let config = match action {
            UserConfigAction::Loaded(config) => config,
            UserConfigAction::Patch(patch) => {
                let mut config = self.config.clone();
                config.apply(&patch);
                config
            }
        };
        Rc::new(Self { config })
    }
}

#[derive(Properties, PartialEq)]
pub struct UserConfigProviderProps {
    pub children: Children,
}

#[function_component(UserConfigProvider)]
pub fn user_config_provider(props: &UserConfigProviderProps) -> Html {
    let state = use_reducer(UserConfigState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_user_config().await.into_result() {
                    Ok(config) => state.dispatch(UserConfigAction::Loaded(config)),
                    Err(e) => log::warn!("Using default user config: {e}"),
                }
            });
            || ()
        });
    }

    // Applied locally right away; the backend copy follows.
    let update = {
        let state = state.clone();
        Callback::from(move |patch: UserConfigPatch| {
            state.dispatch(UserConfigAction::Patch(patch.clone()));
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = update_user_config(&patch).await.into_result() {
                    log::error!("Failed to store user config: {e}");
                }
            });
        })
    };

    let handle = UserConfigHandle {
        config: state.config.clone(),
        update,
    };

    html! {
        <ContextProvider<UserConfigHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<UserConfigHandle>>
    }
}

#[hook]
pub fn use_user_config() -> UserConfigHandle {
    use_context::<UserConfigHandle>().unwrap_or_default()
}
