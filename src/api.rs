//! Generated wrapper surface: one method per remote procedure, each
//! forwarding to [`ZabbixApiClient::call`]. Whether a wrapper attaches
//! the session token is driven by [`ANONYMOUS_METHODS`]; everything
//! else here is a name table, not logic.

use crate::client::ZabbixApiClient;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

/// Remote methods callable without a session token.
pub const ANONYMOUS_METHODS: &[&str] =
    &["apiinfo.version", "user.login", "user.checkAuthentication"];

pub fn requires_auth(method: &str) -> bool {
    !ANONYMOUS_METHODS.contains(&method)
}

macro_rules! api_methods {
    ($($(#[$meta:meta])* $name:ident => $method:literal),* $(,)?) => {
        impl ZabbixApiClient {
            $(
                $(#[$meta])*
                pub async fn $name(&mut self, params: impl Into<Params>) -> Result<Value> {
                    self.call($method, params, "", requires_auth($method)).await
                }
            )*
        }
    };
}

api_methods! {
    action_get => "action.get",
    action_create => "action.create",
    action_update => "action.update",
    action_delete => "action.delete",
    alert_get => "alert.get",
    /// Remote API version; the one call that never needs a token.
    apiinfo_version => "apiinfo.version",
    configuration_export => "configuration.export",
    configuration_import => "configuration.import",
    correlation_get => "correlation.get",
    correlation_create => "correlation.create",
    correlation_update => "correlation.update",
    correlation_delete => "correlation.delete",
    dashboard_get => "dashboard.get",
    dashboard_create => "dashboard.create",
    dashboard_update => "dashboard.update",
    dashboard_delete => "dashboard.delete",
    dcheck_get => "dcheck.get",
    dhost_get => "dhost.get",
    discoveryrule_get => "discoveryrule.get",
    discoveryrule_create => "discoveryrule.create",
    discoveryrule_update => "discoveryrule.update",
    discoveryrule_delete => "discoveryrule.delete",
    drule_get => "drule.get",
    drule_create => "drule.create",
    drule_update => "drule.update",
    drule_delete => "drule.delete",
    dservice_get => "dservice.get",
    event_get => "event.get",
    event_acknowledge => "event.acknowledge",
    graph_get => "graph.get",
    graph_create => "graph.create",
    graph_update => "graph.update",
    graph_delete => "graph.delete",
    graphitem_get => "graphitem.get",
    graphprototype_get => "graphprototype.get",
    graphprototype_create => "graphprototype.create",
    graphprototype_update => "graphprototype.update",
    graphprototype_delete => "graphprototype.delete",
    history_get => "history.get",
    host_get => "host.get",
    host_create => "host.create",
    host_update => "host.update",
    /// Takes a positional array of host ids, which passes through
    /// normalization verbatim.
    host_delete => "host.delete",
    host_massadd => "host.massadd",
    host_massremove => "host.massremove",
    host_massupdate => "host.massupdate",
    hostgroup_get => "hostgroup.get",
    hostgroup_create => "hostgroup.create",
    hostgroup_update => "hostgroup.update",
    hostgroup_delete => "hostgroup.delete",
    hostgroup_massadd => "hostgroup.massadd",
    hostgroup_massremove => "hostgroup.massremove",
    hostgroup_massupdate => "hostgroup.massupdate",
    hostinterface_get => "hostinterface.get",
    hostinterface_create => "hostinterface.create",
    hostinterface_update => "hostinterface.update",
    hostinterface_delete => "hostinterface.delete",
    hostinterface_massadd => "hostinterface.massadd",
    hostinterface_massremove => "hostinterface.massremove",
    hostinterface_replacehostinterfaces => "hostinterface.replacehostinterfaces",
    hostprototype_get => "hostprototype.get",
    hostprototype_create => "hostprototype.create",
    hostprototype_update => "hostprototype.update",
    hostprototype_delete => "hostprototype.delete",
    httptest_get => "httptest.get",
    httptest_create => "httptest.create",
    httptest_update => "httptest.update",
    httptest_delete => "httptest.delete",
    iconmap_get => "iconmap.get",
    iconmap_create => "iconmap.create",
    iconmap_update => "iconmap.update",
    iconmap_delete => "iconmap.delete",
    image_get => "image.get",
    image_create => "image.create",
    image_update => "image.update",
    image_delete => "image.delete",
    item_get => "item.get",
    item_create => "item.create",
    item_update => "item.update",
    item_delete => "item.delete",
    itemprototype_get => "itemprototype.get",
    itemprototype_create => "itemprototype.create",
    itemprototype_update => "itemprototype.update",
    itemprototype_delete => "itemprototype.delete",
    maintenance_get => "maintenance.get",
    maintenance_create => "maintenance.create",
    maintenance_update => "maintenance.update",
    maintenance_delete => "maintenance.delete",
    map_get => "map.get",
    map_create => "map.create",
    map_update => "map.update",
    map_delete => "map.delete",
    mediatype_get => "mediatype.get",
    mediatype_create => "mediatype.create",
    mediatype_update => "mediatype.update",
    mediatype_delete => "mediatype.delete",
    problem_get => "problem.get",
    proxy_get => "proxy.get",
    proxy_create => "proxy.create",
    proxy_update => "proxy.update",
    proxy_delete => "proxy.delete",
    script_get => "script.get",
    script_create => "script.create",
    script_update => "script.update",
    script_delete => "script.delete",
    script_execute => "script.execute",
    script_getscriptsbyhosts => "script.getscriptsbyhosts",
    service_get => "service.get",
    service_create => "service.create",
    service_update => "service.update",
    service_delete => "service.delete",
    template_get => "template.get",
    template_create => "template.create",
    template_update => "template.update",
    template_delete => "template.delete",
    template_massadd => "template.massadd",
    template_massremove => "template.massremove",
    template_massupdate => "template.massupdate",
    trend_get => "trend.get",
    trigger_get => "trigger.get",
    trigger_create => "trigger.create",
    trigger_update => "trigger.update",
    trigger_delete => "trigger.delete",
    trigger_adddependencies => "trigger.adddependencies",
    trigger_deletedependencies => "trigger.deletedependencies",
    triggerprototype_get => "triggerprototype.get",
    triggerprototype_create => "triggerprototype.create",
    triggerprototype_update => "triggerprototype.update",
    triggerprototype_delete => "triggerprototype.delete",
    user_get => "user.get",
    user_create => "user.create",
    user_update => "user.update",
    user_delete => "user.delete",
    user_check_authentication => "user.checkAuthentication",
    /// Raw `user.login` call. [`ZabbixApiClient::login`] is usually what
    /// you want; it also handles the token cache.
    user_login => "user.login",
    user_logout => "user.logout",
    usergroup_get => "usergroup.get",
    usergroup_create => "usergroup.create",
    usergroup_update => "usergroup.update",
    usergroup_delete => "usergroup.delete",
    usermacro_get => "usermacro.get",
    usermacro_create => "usermacro.create",
    usermacro_update => "usermacro.update",
    usermacro_delete => "usermacro.delete",
    usermacro_createglobal => "usermacro.createglobal",
    usermacro_updateglobal => "usermacro.updateglobal",
    usermacro_deleteglobal => "usermacro.deleteglobal",
    valuemap_get => "valuemap.get",
    valuemap_create => "valuemap.create",
    valuemap_update => "valuemap.update",
    valuemap_delete => "valuemap.delete",
}
