use crate::api::{self, HttpSource};
use clap::Args;
use trivia_core as trivia;
use trivia::{CategoryLoader, CellDisplay, CellId, GameSession, LoaderConfig, SessionUpdate};
use yew::prelude::*;

/// Seed for a fresh board, drawn from JavaScript's `Math.random`.
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let high = (random() * f64::from(u32::MAX)) as u64;
    let low = (random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E: std::fmt::Display> HasUpdate for Result<trivia::RevealEffect, E> {
    fn has_update(self) -> bool {
        match self {
            Ok(effect) => effect.has_update(),
            Err(err) => {
                log::warn!("click ignored: {}", err);
                false
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    NewGame,
    BoardLoaded(trivia::Generation, trivia::FetchResult<trivia::Board>),
    CellClicked(CellId),
}

fn cell_class(display: &CellDisplay) -> Classes {
    use CellDisplay::*;
    classes!(
        "clue",
        match display {
            Empty => classes!("empty"),
            Placeholder => classes!("hidden"),
            Question(_) => classes!("question"),
            Answer(_) => classes!("answer", "answered"),
        }
    )
}

fn failure_alert(message: &str) -> String {
    format!("Could not load a new board, try again.\n\n{message}")
}

fn status_line(session: &GameSession) -> String {
    if session.is_loading() {
        return String::new();
    }
    if let Some(err) = session.error() {
        return err.to_string();
    }
    match session.board() {
        Some(board) if board.is_complete() => "Board cleared!".to_string(),
        Some(board) => format!("{} of {} answered", board.answered_count(), board.clue_count()),
        None => String::new(),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: CellId,
    display: CellDisplay,
    callback: Callback<CellId>,
}

/// Answered and empty cells get no click listener.
fn click_handler(
    cell: CellId,
    display: &CellDisplay,
    callback: Callback<CellId>,
) -> Option<Callback<MouseEvent>> {
    display.is_clickable().then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("({}, {}) click", cell.column, cell.row);
            callback.emit(cell);
        })
    })
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        cell,
        display,
        callback,
    } = props.clone();

    let class = cell_class(&display);
    let text = display.text().to_string();

    let onclick = click_handler(cell, &display, callback);

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the trivia API
    #[arg(long, default_value = api::DEFAULT_API_URL)]
    pub api: String,

    /// Category pages are picked at a random offset below this
    #[arg(long, default_value_t = LoaderConfig::DEFAULT_MAX_OFFSET)]
    pub max_offset: u32,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    source: HttpSource,
    config: LoaderConfig,
    seed: Option<u64>,
}

impl GameView {
    fn start_loading(&mut self, ctx: &Context<Self>) {
        let generation = self.session.start();
        let seed = self.seed.unwrap_or_else(js_random_seed);
        log::debug!("loading board {:?} with seed {}", generation, seed);

        let mut loader = CategoryLoader::new(self.source.clone(), self.config, seed);
        ctx.link().send_future(async move {
            let result = loader.load_board().await;
            Msg::BoardLoaded(generation, result)
        });
    }

    fn view_board(&self, ctx: &Context<Self>, board: &trivia::Board) -> Html {
        let board_class = classes!("board", board.is_complete().then_some("complete"));

        html! {
            <table class={board_class}>
                <thead>
                    <tr>
                        { for board.headings().into_iter().map(|title| html! { <th>{title}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..board.rows()).map(|row| html! {
                            <tr>
                                {
                                    for (0..board.columns()).map(|column| {
                                        let cell = CellId::new(column, row);
                                        let display = board.display(cell);
                                        let callback = ctx.link().callback(Msg::CellClicked);
                                        html! {
                                            <CellView {cell} {display} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            session: GameSession::new(),
            source: HttpSource::new(&props.api),
            config: LoaderConfig {
                max_offset: props.max_offset,
            },
            seed: props.seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NewGame => {
                self.start_loading(ctx);
                true
            }
            BoardLoaded(generation, result) => match self.session.finish(generation, result) {
                SessionUpdate::Stale => false,
                SessionUpdate::Ready => {
                    log::debug!("board {:?} ready", generation);
                    true
                }
                SessionUpdate::Failed(message) => {
                    gloo::dialogs::alert(&failure_alert(&message));
                    true
                }
            },
            CellClicked(cell) => {
                log::debug!("click cell: {:?}", cell);
                self.session.click(cell).has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let is_loading = self.session.is_loading();
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="trivia">
                <nav>
                    <button class="start" onclick={cb_new_game}>{self.session.start_label()}</button>
                </nav>
                if is_loading {
                    <div class="loading" aria-busy="true">{"Loading..."}</div>
                }
                if let Some(board) = self.session.board() {
                    { self.view_board(ctx, board) }
                }
                <small class="status">{status_line(&self.session)}</small>
            </div>
        }
    }
}
