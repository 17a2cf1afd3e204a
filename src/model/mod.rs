/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Authentication models: credential pair, refresh/login payloads, auth events
pub mod auth;
/// Request descriptor and single-shot HTTP dispatch
pub mod http;
