// Endpoint service modules, one per resource family. Each is a flat set
// of inherent methods on `ApiClient` mapping one-to-one to backend
// endpoints: inputs are ids or typed records, outputs are parsed JSON in
// server order, failures rethrow the normalized client error.

mod auth;
mod content;
mod forum;
mod notifications;
mod tools;
