pub mod vote_controllers;
