//! NeuroVerse navigation chrome (neuroverse-nav)
//!
//! Scroll-aware navigation bar, mega-menu dropdown and page widgets for the
//! NeuroVerse marketing site, with a terminal preview.
//!
//! The library follows a Pure Core / Impure Shell split: `model`, `page`,
//! `state`, `scroll`, `nav` and `widgets` are deterministic and driven by a
//! virtual clock through `runtime`; `site` composes them and `view` owns the
//! terminal.

pub mod bridge;
pub mod config;
pub mod contact;
pub mod logging;
pub mod model;
pub mod nav;
pub mod page;
pub mod router;
pub mod runtime;
pub mod scroll;
pub mod site;
pub mod state;
pub mod view;
pub mod widgets;
