//! This module contains the resource types of the [`v1alpha1::AmazonCloudWatchAgent`] custom
//! resource managed by the Amazon CloudWatch Agent Operator.
//!
//! Every field of the spec is optional. Omitted fields are never serialized, so a rendered
//! manifest only contains what was configured.

pub mod v1alpha1 {
    use std::collections::BTreeMap;

    use k8s_openapi::{
        api::{
            apps::v1::{DaemonSetUpdateStrategy, DeploymentStrategy},
            autoscaling::v2::{HorizontalPodAutoscalerBehavior, PodsMetricSource},
            core::v1::{
                Affinity, Container, EnvFromSource, EnvVar, Lifecycle, PersistentVolumeClaim,
                PodSecurityContext, ResourceRequirements, SecurityContext, ServicePort, Toleration,
                TopologySpreadConstraint, Volume, VolumeMount,
            },
            networking::v1::IngressTLS,
        },
        apimachinery::pkg::{apis::meta::v1::LabelSelector, util::intstr::IntOrString},
    };
    use kube::CustomResource;
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    /// AmazonCloudWatchAgentSpec defines the desired state of AmazonCloudWatchAgent.
    #[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[kube(
        group = "cloudwatch.aws.amazon.com",
        version = "v1alpha1",
        kind = "AmazonCloudWatchAgent",
        plural = "amazoncloudwatchagents",
        shortname = "cwagent",
        status = "AmazonCloudWatchAgentStatus",
        namespaced
    )]
    #[serde(rename_all = "camelCase")]
    pub struct AmazonCloudWatchAgentSpec {
        /// ManagementState defines if the CR should be managed by the operator or not. Default is
        /// managed.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub management_state: Option<ManagementState>,

        /// Resources to set on the AmazonCloudWatchAgent pods.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resources: Option<ResourceRequirements>,

        /// NodeSelector to schedule AmazonCloudWatchAgent pods.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub node_selector: Option<BTreeMap<String, String>>,

        /// Args is the set of arguments to pass to the AmazonCloudWatchAgent binary.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub args: Option<BTreeMap<String, String>>,

        /// Replicas is the number of pod instances for the underlying AmazonCloudWatchAgent. Set
        /// this if you are not using autoscaling.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub replicas: Option<i32>,

        /// Autoscaler specifies the pod autoscaling configuration to use for the workload.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub autoscaler: Option<AutoscalerSpec>,

        /// PodDisruptionBudget specifies the pod disruption budget configuration to use for the
        /// workload.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pod_disruption_budget: Option<PodDisruptionBudgetSpec>,

        /// SecurityContext configures the container security context for the agent container.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub security_context: Option<SecurityContext>,

        /// PodSecurityContext configures the pod security context for the agent pod.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pod_security_context: Option<PodSecurityContext>,

        /// PodAnnotations is the set of annotations that will be attached to the agent pods.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pod_annotations: Option<BTreeMap<String, String>>,

        /// TargetAllocator indicates a value which determines whether to spawn a target
        /// allocation resource or not.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub target_allocator: Option<TargetAllocator>,

        /// Mode represents how the agent should be deployed (deployment, daemonset, statefulset
        /// or sidecar).
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mode: Option<Mode>,

        /// ServiceAccount indicates the name of an existing service account to use with this
        /// instance. When set, the operator will not automatically create a ServiceAccount.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub service_account: Option<String>,

        /// Image indicates the container image to use for the agent.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image: Option<String>,

        /// UpgradeStrategy represents how the operator will handle upgrades to the CR when a
        /// newer version of the operator is deployed.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub upgrade_strategy: Option<UpgradeStrategy>,

        /// ImagePullPolicy indicates the pull policy to be used for retrieving the container
        /// image (Always, Never, IfNotPresent).
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image_pull_policy: Option<String>,

        /// Config is the raw JSON to be used as the agent's configuration.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub config: Option<String>,

        /// OtelConfig is the raw YAML to be used as the agent's OpenTelemetry configuration.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub otel_config: Option<String>,

        /// WorkingDir represents the working directory of the agent container.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub working_dir: Option<String>,

        /// VolumeMounts represents the mount points to use in the underlying agent deployment(s).
        #[serde(skip_serializing_if = "Option::is_none")]
        pub volume_mounts: Option<Vec<VolumeMount>>,

        /// Ports allows a set of ports to be exposed by the underlying v1.Service.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ports: Option<Vec<ServicePort>>,

        /// Env represents the environment variables to set on the agent container.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub env: Option<Vec<EnvVar>>,

        /// EnvFrom represents the sources of environment variables for the agent container.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub env_from: Option<Vec<EnvFromSource>>,

        /// VolumeClaimTemplates will provide stable storage using PersistentVolumes. Only
        /// available when the mode is statefulset.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub volume_claim_templates: Option<Vec<PersistentVolumeClaim>>,

        /// Tolerations to schedule agent pods.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tolerations: Option<Vec<Toleration>>,

        /// Volumes represents which volumes to use in the underlying agent deployment(s).
        #[serde(skip_serializing_if = "Option::is_none")]
        pub volumes: Option<Vec<Volume>>,

        /// Ingress is used to specify how the agent's receivers are exposed.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ingress: Option<Ingress>,

        /// HostNetwork indicates if the pod should run in the host networking namespace.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub host_network: Option<bool>,

        /// If specified, indicates the pod's priority.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub priority_class_name: Option<String>,

        /// If specified, indicates the pod's scheduling constraints.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub affinity: Option<Affinity>,

        /// Actions that the management system should take in response to container lifecycle
        /// events.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub lifecycle: Option<Lifecycle>,

        /// Duration in seconds the pod needs to terminate gracefully upon probe failure.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub termination_grace_period_seconds: Option<i64>,

        /// Liveness config for the agent container, except for exec commands.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub liveness_probe: Option<Probe>,

        /// InitContainers allows injecting initContainers to the agent pod definition.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub init_containers: Option<Vec<Container>>,

        /// AdditionalContainers allows injecting additional containers into the agent's pod
        /// definition.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub additional_containers: Option<Vec<Container>>,

        /// ObservabilitySpec defines how telemetry data gets handled.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub observability: Option<ObservabilitySpec>,

        /// TopologySpreadConstraints embedded kubernetes pod configuration option, controls how
        /// pods are spread across your cluster among failure-domains.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub topology_spread_constraints: Option<Vec<TopologySpreadConstraint>>,

        /// ConfigMaps is a list of ConfigMaps in the same namespace as the AmazonCloudWatchAgent
        /// object, which shall be mounted into the agent pods.
        #[serde(rename = "configmaps", skip_serializing_if = "Option::is_none")]
        pub config_maps: Option<Vec<ConfigMapsSpec>>,

        /// UpdateStrategy represents the strategy the operator will take replacing existing
        /// DaemonSet pods with new pods.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub update_strategy: Option<DaemonSetUpdateStrategy>,

        /// DeploymentUpdateStrategy represents the strategy the operator will take replacing
        /// existing Deployment pods with new pods.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub deployment_update_strategy: Option<DeploymentStrategy>,
    }

    /// ManagementState defines whether the operator reconciles the resource.
    #[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ManagementState {
        Managed,
        Unmanaged,
    }

    /// Mode represents how the agent should be deployed.
    #[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Mode {
        #[serde(rename = "daemonset")]
        DaemonSet,
        Deployment,
        Sidecar,
        #[serde(rename = "statefulset")]
        StatefulSet,
    }

    /// UpgradeStrategy represents how the operator will handle upgrades to the CR.
    #[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum UpgradeStrategy {
        Automatic,
        None,
    }

    /// AutoscalerSpec defines the agent's horizontal pod autoscaler.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AutoscalerSpec {
        /// MinReplicas sets a lower bound to the autoscaling feature.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub min_replicas: Option<i32>,

        /// MaxReplicas sets an upper bound to the autoscaling feature. If MaxReplicas is set
        /// autoscaling is enabled.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_replicas: Option<i32>,

        /// HorizontalPodAutoscalerBehavior configures the scaling behavior of the target in both
        /// Up and Down directions (scaleUp and scaleDown fields respectively).
        #[serde(skip_serializing_if = "Option::is_none")]
        pub behavior: Option<HorizontalPodAutoscalerBehavior>,

        /// Metrics is meant to provide a customizable way to configure HPA metrics. Currently
        /// the only supported custom metrics is type=Pod.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub metrics: Option<Vec<MetricSpec>>,

        /// TargetCPUUtilization sets the target average CPU used across all replicas.
        #[serde(
            rename = "targetCPUUtilization",
            skip_serializing_if = "Option::is_none"
        )]
        pub target_cpu_utilization: Option<i32>,

        /// TargetMemoryUtilization sets the target average memory utilization across all
        /// replicas.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub target_memory_utilization: Option<i32>,
    }

    /// MetricSpec defines a subset of metrics to be defined for the HPA's metric array.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MetricSpec {
        /// MetricSourceType indicates the type of metric.
        #[serde(rename = "type")]
        pub type_: String,

        /// PodsMetricSource indicates how to scale on a metric describing each pod in the
        /// current scale target.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pods: Option<PodsMetricSource>,
    }

    /// PodDisruptionBudgetSpec defines the agent's pod disruption budget.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PodDisruptionBudgetSpec {
        /// An eviction is allowed if at least "minAvailable" pods selected by "selector" will
        /// still be available after the eviction.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub min_available: Option<IntOrString>,

        /// An eviction is allowed if at most "maxUnavailable" pods selected by "selector" are
        /// unavailable after the eviction.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_unavailable: Option<IntOrString>,
    }

    /// TargetAllocator defines the configuration for the Prometheus target allocator.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TargetAllocator {
        /// Replicas is the number of pod instances for the underlying TargetAllocator.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub replicas: Option<i32>,

        /// NodeSelector to schedule target allocator pods.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub node_selector: Option<BTreeMap<String, String>>,

        /// Resources to set on the target allocator pods.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resources: Option<ResourceRequirements>,

        /// AllocationStrategy determines which strategy the target allocator should use for
        /// allocation. The current option is consistent-hashing.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub allocation_strategy: Option<TargetAllocatorAllocationStrategy>,

        /// FilterStrategy determines how to filter targets before allocating them among the
        /// agents. The only current option is relabel-config.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub filter_strategy: Option<String>,

        /// ServiceAccount indicates the name of an existing service account to use with this
        /// instance.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub service_account: Option<String>,

        /// Image indicates the container image to use for the target allocator.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image: Option<String>,

        /// Enabled indicates whether to use a target allocation mechanism for Prometheus
        /// targets or not.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub enabled: Option<bool>,

        /// If specified, indicates the pod's scheduling constraints.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub affinity: Option<Affinity>,

        /// PrometheusCR defines the configuration for the retrieval of PrometheusOperator CRDs
        /// (servicemonitor.monitoring.coreos.com/v1 and podmonitor.monitoring.coreos.com/v1).
        #[serde(rename = "prometheusCR", skip_serializing_if = "Option::is_none")]
        pub prometheus_cr: Option<TargetAllocatorPrometheusCr>,

        /// SecurityContext configures the container security context for the target allocator.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub security_context: Option<PodSecurityContext>,

        /// TopologySpreadConstraints embedded kubernetes pod configuration option.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub topology_spread_constraints: Option<Vec<TopologySpreadConstraint>>,

        /// Toleration embedded kubernetes pod configuration option.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tolerations: Option<Vec<Toleration>>,

        /// Env represents the environment variables to set on the target allocator container.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub env: Option<Vec<EnvVar>>,

        /// ObservabilitySpec defines how telemetry data gets handled.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub observability: Option<ObservabilitySpec>,
    }

    #[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum TargetAllocatorAllocationStrategy {
        LeastWeighted,
        ConsistentHashing,
    }

    /// TargetAllocatorPrometheusCr configures Prometheus CustomResource handling in the target
    /// allocator.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TargetAllocatorPrometheusCr {
        /// Enabled indicates whether to use a PrometheusOperator custom resources as targets or
        /// not.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub enabled: Option<bool>,

        /// Interval between consecutive scrapes. Equivalent to the same setting on the
        /// Prometheus CRD. Default: "30s".
        #[serde(skip_serializing_if = "Option::is_none")]
        pub scrape_interval: Option<String>,

        /// PodMonitors to be selected for target discovery. An empty selector selects all
        /// PodMonitors.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pod_monitor_selector: Option<BTreeMap<String, String>>,

        /// ServiceMonitors to be selected for target discovery. An empty selector selects all
        /// ServiceMonitors.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub service_monitor_selector: Option<BTreeMap<String, String>>,
    }

    /// Ingress is used to specify how the agent is exposed.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Ingress {
        /// Type default value is: "". Supported types are: ingress, route.
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        pub type_: Option<IngressType>,

        /// RuleType defines how Ingress exposes collector receivers. IngressRuleTypePath
        /// ("path") exposes each receiver port on a unique path on single domain defined in
        /// Hostname. IngressRuleTypeSubdomain ("subdomain") exposes each receiver port on a
        /// unique subdomain of Hostname. Default is IngressRuleTypePath ("path").
        #[serde(skip_serializing_if = "Option::is_none")]
        pub rule_type: Option<IngressRuleType>,

        /// Hostname by which the ingress proxy can be reached.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hostname: Option<String>,

        /// Annotations to add to ingress. e.g. 'cert-manager.io/cluster-issuer: "letsencrypt"'
        #[serde(skip_serializing_if = "Option::is_none")]
        pub annotations: Option<BTreeMap<String, String>>,

        /// TLS configuration.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tls: Option<Vec<IngressTLS>>,

        /// IngressClassName is the name of an IngressClass cluster resource. Ingress controller
        /// implementations use this field to know whether they should be serving this Ingress
        /// resource.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ingress_class_name: Option<String>,

        /// Route is an OpenShift specific section that is only considered when type "route" is
        /// used.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub route: Option<OpenShiftRoute>,
    }

    #[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum IngressType {
        Ingress,
        Route,
    }

    #[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum IngressRuleType {
        Path,
        Subdomain,
    }

    /// OpenShiftRoute defines openshift route specific settings.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct OpenShiftRoute {
        /// Termination indicates termination type. By default "edge" is used.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub termination: Option<TlsRouteTermination>,
    }

    #[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum TlsRouteTermination {
        Insecure,
        Edge,
        Passthrough,
        Reencrypt,
    }

    /// Probe defines the agent's liveness probe, except for the exec handler.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Probe {
        /// Number of seconds after the container has started before liveness probes are
        /// initiated.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub initial_delay_seconds: Option<i32>,

        /// Number of seconds after which the probe times out. Defaults to 1 second.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub timeout_seconds: Option<i32>,

        /// How often (in seconds) to perform the probe. Default to 10 seconds.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub period_seconds: Option<i32>,

        /// Minimum consecutive successes for the probe to be considered successful after having
        /// failed. Defaults to 1.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub success_threshold: Option<i32>,

        /// Minimum consecutive failures for the probe to be considered failed after having
        /// succeeded. Defaults to 3.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub failure_threshold: Option<i32>,

        /// Optional duration in seconds the pod needs to terminate gracefully upon probe
        /// failure.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub termination_grace_period_seconds: Option<i64>,
    }

    /// ObservabilitySpec defines how telemetry data gets handled.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ObservabilitySpec {
        /// Metrics defines the metrics configuration for operands.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub metrics: Option<MetricsConfigSpec>,
    }

    /// MetricsConfigSpec defines a metrics config.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MetricsConfigSpec {
        /// EnableMetrics specifies if ServiceMonitor or PodMonitor should be created for the
        /// service managed by the operator.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub enable_metrics: Option<bool>,

        /// DisablePrometheusAnnotations controls the automatic addition of default Prometheus
        /// annotations ('prometheus.io/scrape', 'prometheus.io/port', and 'prometheus.io/path').
        #[serde(
            rename = "DisablePrometheusAnnotations",
            skip_serializing_if = "Option::is_none"
        )]
        pub disable_prometheus_annotations: Option<bool>,
    }

    /// ConfigMapsSpec references a ConfigMap to mount into the agent pods.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ConfigMapsSpec {
        /// Configmap defines name and path where the configMaps should be mounted.
        pub name: String,

        #[serde(rename = "mountpath")]
        pub mount_path: String,
    }

    /// AmazonCloudWatchAgentStatus defines the observed state of AmazonCloudWatchAgent.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AmazonCloudWatchAgentStatus {
        /// Scale is the AmazonCloudWatchAgent's scale subresource status.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub scale: Option<ScaleSubresourceStatus>,

        /// Version of the managed agent (operand).
        #[serde(skip_serializing_if = "Option::is_none")]
        pub version: Option<String>,

        /// Image indicates the container image to use for the agent.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image: Option<String>,
    }

    /// ScaleSubresourceStatus defines the observed state of the AmazonCloudWatchAgent's scale
    /// subresource.
    #[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ScaleSubresourceStatus {
        /// The selector used to match the AmazonCloudWatchAgent's deployment or statefulSet pods.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub selector: Option<String>,

        /// The total number non-terminated pods targeted by this AmazonCloudWatchAgent's
        /// deployment or statefulSet.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub replicas: Option<i32>,

        /// StatusReplicas is the number of pods targeted by this AmazonCloudWatchAgent's with a
        /// Ready Condition / Total number of non-terminated pods targeted by this
        /// AmazonCloudWatchAgent's (this includes its deployment or statefulSet).
        #[serde(skip_serializing_if = "Option::is_none")]
        pub status_replicas: Option<String>,

        /// Selector for the pods, for use by the scale subresource.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub label_selector: Option<LabelSelector>,
    }
}
