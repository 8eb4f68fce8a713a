// Copyright @yucwang 2026

pub mod full_capture;
pub mod incidence_weighted;
