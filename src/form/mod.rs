//! Client side of the withdrawal form: checks the amount locally, submits the
//! fields to the service and reports the answer through a [`view::FormView`].

pub mod controller;
pub mod models;
pub mod view;
