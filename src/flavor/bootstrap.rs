//! Bootstrap 3 tag catalog
//!
//! One more template fed into the compiler: shorthand builders for the
//! Bootstrap component vocabulary, all prefixed `bs_`. Composite entries
//! are written on a single line so the rendered markup carries no
//! incidental template whitespace.

/// Bootstrap 3 catalog template, compiled with prefix `bs_`
pub const BOOTSTRAP_TEMPLATE: &str = r#"<template prefix="bs_">
    <div class="container"/>
    <div class="container-fluid"/>
    <div class="row"/>
    Typography:
        <p class="lead"/>
        <p class="text-left"/>
        <p class="text-center"/>
        <p class="text-right"/>
        <p class="text-justify"/>
        <p class="text-nowrap"/>
        <p class="text-lowercase"/>
        <p class="text-uppercase"/>
        <p class="text-capitalize"/>
        <blockquote class="blockquote-reverse"/>
        <ul id="ul-unstyled" class="list-unstyled"/>
        <ul id="ul-inline" class="list-inline"/>
        <ol id="ol-unstyled" class="list-unstyled"/>
        <ol id="ol-inline" class="list-inline"/>
        <dl class="dl-horizontal"/>
    Tables:
        <table class="table"/>
        <table id="table-striped" class="table table-striped"/>
        <table id="table-bordered" class="table table-bordered"/>
        <table id="table-hover" class="table table-hover"/>
        <table id="table-condensed" class="table table-condensed"/>
        <div class="table-responsive"><table class="table" template-attribute-filter="*"><template-content/><template-yield/></table></div>
    Forms:
        <form id="form" role="form"/>
        <form class="form-inline" role="form"/>
        <form class="form-horizontal" role="form"/>
        <div class="form-group"/>
        <p class="help-block"/>
        <input id="input" class="form-control"/>
        <textarea id="textarea" class="form-control"/>
        <select id="select" class="form-control"/>
        <p class="form-control-static"/>
        <label class="control-label"/>
        <div class="checkbox"><label><input type="checkbox" template-attribute-filter="*"/><template-content/><template-yield/></label></div>
        <div class="radio"><label><input type="radio" template-attribute-filter="*"/><template-content/><template-yield/></label></div>
        <label class="checkbox-inline"><input type="checkbox" template-attribute-filter="*"/><template-content/><template-yield/></label>
        <label class="radio-inline"><input type="radio" template-attribute-filter="*"/><template-content/><template-yield/></label>
    Buttons:
        <button id="btn-default" type="button" class="btn btn-default"/>
        <button id="btn-primary" type="button" class="btn btn-primary"/>
        <button id="btn-success" type="button" class="btn btn-success"/>
        <button id="btn-info" type="button" class="btn btn-info"/>
        <button id="btn-warning" type="button" class="btn btn-warning"/>
        <button id="btn-danger" type="button" class="btn btn-danger"/>
        <button id="btn-link" type="button" class="btn btn-link"/>
    Images:
        <img class="img-responsive"/>
        <img class="img-rounded"/>
        <img class="img-circle"/>
        <img class="img-thumbnail"/>
    Helper classes:
        <p class="text-muted"/>
        <p class="text-primary"/>
        <p class="text-success"/>
        <p class="text-info"/>
        <p class="text-warning"/>
        <p class="text-danger"/>
        <p class="bg-primary"/>
        <p class="bg-success"/>
        <p class="bg-info"/>
        <p class="bg-warning"/>
        <p class="bg-danger"/>
        <button type="button" class="close" template-attribute-filter="*"><span aria-hidden="true">&times;</span><span class="sr-only"><template-content>Close</template-content></span><template-yield/></button>
        <span class="caret"></span>
        <div class="pull-left"/>
        <div class="pull-right"/>
        <div class="center-block"/>
        <div class="clearfix"/>
    Menus:
        <li id="menuitem" role="presentation" template-attribute-class-from-flag="active, disabled"><a href="#" role="menuitem" tabindex="-1" template-attribute-filter="*, -active, -disabled"><template-content/><template-yield/></a></li>
    Dropdowns:
        <div class="dropdown"/>
        <button id="dropdown-toggle" type="button" class="btn btn-default dropdown-toggle" data-toggle="dropdown"/>
        <ul class="dropdown-menu" role="menu"/>
        <ul id="dropdown-menu-right" class="dropdown-menu dropdown-menu-right" role="menu"/>
        <li class="dropdown-header" role="presentation"/>
        <li class="divider" role="presentation"/>
    Button groups:
        <div class="btn-group" role="group"/>
        <div class="btn-toolbar" role="toolbar"/>
        <div class="btn-group-vertical" role="group"/>
        <div id="btn-group-justified" class="btn-group btn-group-justified" role="group"/>
    Input groups:
        <div class="input-group"/>
        <div id="input-group-lg" class="input-group input-group-lg"/>
        <div id="input-group-sm" class="input-group input-group-sm"/>
        <span class="input-group-addon"/>
        <span class="input-group-btn"><button class="btn btn-default" type="button" template-attribute-filter="*"><template-content/><template-yield/></button></span>
    Navs:
        <ul id="nav-tabs" class="nav nav-tabs"/>
        <ul id="nav-pills" class="nav nav-pills"/>
        <ul id="nav-pills-stacked" class="nav nav-pills nav-stacked"/>
        <ul id="nav-tabs-justified" class="nav nav-tabs nav-justified"/>
        <ul id="nav-pills-justified" class="nav nav-pills nav-justified"/>
        <li id="nav-dropdown" role="presentation" class="dropdown"/>
    Navbar:
        <nav id="navbar-default" class="navbar navbar-default" role="navigation"/>
        <div class="navbar-header"/>
    Pager:
        <ul class="pager"/>
        <li class="previous" template-attribute-class-from-flag="disabled"><a href="#" template-attribute-filter="*, -disabled"><span aria-hidden="true">&larr;</span><template-content/><template-yield/></a></li>
        <li class="next" template-attribute-class-from-flag="disabled"><a href="#" template-attribute-filter="*, -disabled"><template-content/><template-yield/><span aria-hidden="true">&rarr;</span></a></li>
    Labels:
        <span id="label-default" class="label label-default"/>
        <span id="label-primary" class="label label-primary"/>
        <span id="label-success" class="label label-success"/>
        <span id="label-info" class="label label-info"/>
        <span id="label-warning" class="label label-warning"/>
        <span id="label-danger" class="label label-danger"/>
    Badges:
        <span class="badge"/>
    Jumbotron:
        <div class="jumbotron"/>
    Page header:
        <div class="page-header"/>
    Alerts:
        <div id="alert-success" class="alert alert-success" role="alert"/>
        <div id="alert-info" class="alert alert-info" role="alert"/>
        <div id="alert-warning" class="alert alert-warning" role="alert"/>
        <div id="alert-danger" class="alert alert-danger" role="alert"/>
    Panels:
        <div id="panel-primary" class="panel panel-primary"/>
        <div id="panel-success" class="panel panel-success"/>
        <div id="panel-info" class="panel panel-info"/>
        <div id="panel-warning" class="panel panel-warning"/>
        <div id="panel-danger" class="panel panel-danger"/>
        <div class="panel-heading"/>
        <div class="panel-body"/>
        <div class="panel-footer"/>
    Modals:
        <div id="modal-dialog" class="modal" tabindex="-1" role="dialog" aria-hidden="true" template-attribute-filter="*"><div class="modal-dialog"><div class="modal-content"><template-content/><template-yield/></div></div></div>
        <div id="modal-dialog-lg" class="modal" tabindex="-1" role="dialog" aria-hidden="true" template-attribute-filter="*"><div class="modal-dialog modal-lg"><div class="modal-content"><template-content/><template-yield/></div></div></div>
        <div id="modal-dialog-sm" class="modal" tabindex="-1" role="dialog" aria-hidden="true" template-attribute-filter="*"><div class="modal-dialog modal-sm"><div class="modal-content"><template-content/><template-yield/></div></div></div>
        <div class="modal-header"/>
        <div class="modal-body"/>
        <div class="modal-footer"/>
        <button id="modal-close-icon" type="button" class="close" data-dismiss="modal"><span aria-hidden="true">&times;</span><span class="sr-only"><template-content>Close</template-content></span><template-yield/></button>
        <button id="modal-close-button" type="button" class="btn btn-default" data-dismiss="modal"><template-content>Close</template-content><template-yield/></button>
</template>"#;
