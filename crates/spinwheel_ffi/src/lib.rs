//! Flutter bridge for the spin-the-wheel onboarding core.
//! Only `api` is exposed to FRB codegen.

pub mod api;
